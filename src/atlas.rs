//! CPU-side texture and atlas geometry.
//!
//! An atlas image is cut into equally sized glyphs, numbered row-major from
//! the top-left. When a glyph spans the full image width the atlas is a
//! tower and uploads as a single array texture; otherwise each glyph has to
//! be copied out row by row, which [`AtlasLayout::extract_glyph`] does.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Validated texture dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSize {
    width: u32,
    height: u32,
}

impl TextureSize {
    /// Both dimensions must be non-zero powers of two.
    #[track_caller]
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if !width.is_power_of_two() {
            return Err(Error::non_power_of_two("width", width));
        }
        if !height.is_power_of_two() {
            return Err(Error::non_power_of_two("height", height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte length of an RGBA image of this size.
    pub fn rgba_len(&self) -> usize {
        self.width as usize * self.height as usize * CHANNELS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtlasShape {
    /// Glyphs are stacked vertically and each spans the full image width.
    Tower,
    /// Glyphs are laid out in rows and columns.
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasLayout {
    image_width: u32,
    image_height: u32,
    glyph_width: u32,
    glyph_height: u32,
}

impl AtlasLayout {
    /// The image dimensions must be whole multiples of the glyph dimensions.
    #[track_caller]
    pub fn new(
        image_width: u32,
        image_height: u32,
        glyph_width: u32,
        glyph_height: u32,
    ) -> Result<Self> {
        if glyph_width == 0 || image_width % glyph_width != 0 {
            return Err(Error::size_indivisible(image_width.into(), glyph_width.into()));
        }
        if glyph_height == 0 || image_height % glyph_height != 0 {
            return Err(Error::size_indivisible(image_height.into(), glyph_height.into()));
        }
        Ok(Self {
            image_width,
            image_height,
            glyph_width,
            glyph_height,
        })
    }

    pub fn shape(&self) -> AtlasShape {
        if self.glyph_width == self.image_width {
            AtlasShape::Tower
        } else {
            AtlasShape::Grid
        }
    }

    pub fn columns(&self) -> u32 {
        self.image_width / self.glyph_width
    }

    pub fn rows(&self) -> u32 {
        self.image_height / self.glyph_height
    }

    /// Number of glyphs in the atlas. Wider than the dimensions because a
    /// 65536x65536 image of 1x1 glyphs holds `1 << 32` of them.
    pub fn glyph_count(&self) -> u64 {
        u64::from(self.columns()) * u64::from(self.rows())
    }

    pub fn glyph_size(&self) -> (u32, u32) {
        (self.glyph_width, self.glyph_height)
    }

    /// Pixel coordinates of the top-left corner of glyph `index`.
    pub fn glyph_origin(&self, index: u32) -> Result<(u32, u32)> {
        let count = self.glyph_count();
        if u64::from(index) >= count {
            return Err(Error::index_out_of_range("glyph", index.into(), count));
        }
        let columns = self.columns();
        Ok((
            index % columns * self.glyph_width,
            index / columns * self.glyph_height,
        ))
    }

    /// Byte offset of the first pixel of `row` of glyph `index` inside the
    /// RGBA atlas image.
    pub fn row_offset(&self, index: u32, row: u32) -> Result<usize> {
        if row >= self.glyph_height {
            return Err(Error::index_out_of_range(
                "glyph row",
                row.into(),
                self.glyph_height.into(),
            ));
        }
        let (x, y) = self.glyph_origin(index)?;
        let pixel = (y + row) as usize * self.image_width as usize + x as usize;
        Ok(pixel * CHANNELS)
    }

    /// Copies glyph `index` out of the RGBA atlas `pixels` into a tightly
    /// packed RGBA image of the glyph's size.
    #[track_caller]
    pub fn extract_glyph(&self, pixels: &[u8], index: u32) -> Result<Vec<u8>> {
        let expected = self.image_width as usize * self.image_height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(Error::size_mismatch(expected as u64, pixels.len() as u64));
        }
        let row_len = self.glyph_width as usize * CHANNELS;
        let mut glyph = Vec::with_capacity(row_len * self.glyph_height as usize);
        for row in 0..self.glyph_height {
            let start = self.row_offset(index, row)?;
            glyph.extend_from_slice(&pixels[start..start + row_len]);
        }
        Ok(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_glyph_is_indivisible() {
        assert!(matches!(
            AtlasLayout::new(64, 64, 0, 8),
            Err(Error::SizeIndivisible { divisor: 0, .. })
        ));
    }

    #[test]
    fn glyph_count_of_largest_grid_does_not_wrap() {
        let layout = AtlasLayout::new(65536, 65536, 1, 1).unwrap();
        assert_eq!(layout.glyph_count(), 1 << 32);
        assert_eq!(layout.glyph_origin(u32::MAX).unwrap(), (65535, 65535));
    }

    #[test]
    fn last_row_offset_stays_in_bounds() {
        let layout = AtlasLayout::new(4, 4, 2, 2).unwrap();
        let offset = layout.row_offset(3, 1).unwrap();
        assert_eq!(offset, (3 * 4 + 2) * CHANNELS);
        assert!(offset + 2 * CHANNELS <= 4 * 4 * CHANNELS);
    }
}
