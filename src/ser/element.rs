use super::codec::{self, WORD_SIZE};
use crate::error::{Error, Result};
use crate::vector::{Vec2, Vec3, Vec4};
use core::fmt;
use serde::{Deserialize, Serialize};

/// The five fixed-width element kinds the array format carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    F32,
    U32,
    Vec2,
    Vec3,
    Vec4,
}

impl ElementKind {
    /// Every element kind in tag order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::F32,
        ElementKind::U32,
        ElementKind::Vec2,
        ElementKind::Vec3,
        ElementKind::Vec4,
    ];

    /// Serialized width of one element in bytes.
    pub const fn width(self) -> usize {
        match self {
            ElementKind::F32 | ElementKind::U32 => WORD_SIZE,
            ElementKind::Vec2 => 2 * WORD_SIZE,
            ElementKind::Vec3 => 3 * WORD_SIZE,
            ElementKind::Vec4 => 4 * WORD_SIZE,
        }
    }

    /// Tag byte used by the tagged framing. Zero is never assigned.
    pub const fn tag(self) -> u8 {
        match self {
            ElementKind::F32 => 1,
            ElementKind::U32 => 2,
            ElementKind::Vec2 => 3,
            ElementKind::Vec3 => 4,
            ElementKind::Vec4 => 5,
        }
    }

    /// Parses a tag byte, failing with [`Error::UnknownTag`].
    pub fn from_tag(tag: u8) -> Result<Self> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| Error::unknown_tag(tag))
    }

    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            ElementKind::F32 => "f32",
            ElementKind::U32 => "u32",
            ElementKind::Vec2 => "vec2",
            ElementKind::Vec3 => "vec3",
            ElementKind::Vec4 => "vec4",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for u32 {}
    impl Sealed for crate::vector::Vec2 {}
    impl Sealed for crate::vector::Vec3 {}
    impl Sealed for crate::vector::Vec4 {}
}

/// A value the array format can carry.
///
/// Implemented for exactly the five element kinds. `encode` and `decode`
/// operate on slices of exactly [`Element::WIDTH`] bytes and panic otherwise;
/// the array functions guarantee that precondition.
pub trait Element: sealed::Sealed + Copy + Send + Sync + 'static {
    const KIND: ElementKind;
    const WIDTH: usize = Self::KIND.width();

    fn encode(&self, out: &mut [u8]);

    fn decode(bytes: &[u8]) -> Self;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;

    fn encode(&self, out: &mut [u8]) {
        codec::put_f32(out, 0, *self);
    }

    fn decode(bytes: &[u8]) -> Self {
        codec::decode_f32(codec::word(bytes, 0))
    }
}

impl Element for u32 {
    const KIND: ElementKind = ElementKind::U32;

    fn encode(&self, out: &mut [u8]) {
        out[..WORD_SIZE].copy_from_slice(&codec::encode_u32(*self));
    }

    fn decode(bytes: &[u8]) -> Self {
        codec::decode_u32(codec::word(bytes, 0))
    }
}

impl Element for Vec2 {
    const KIND: ElementKind = ElementKind::Vec2;

    fn encode(&self, out: &mut [u8]) {
        for (index, value) in self.to_array().into_iter().enumerate() {
            codec::put_f32(out, index, value);
        }
    }

    fn decode(bytes: &[u8]) -> Self {
        Vec2::new(read_f32(bytes, 0), read_f32(bytes, 1))
    }
}

impl Element for Vec3 {
    const KIND: ElementKind = ElementKind::Vec3;

    fn encode(&self, out: &mut [u8]) {
        for (index, value) in self.to_array().into_iter().enumerate() {
            codec::put_f32(out, index, value);
        }
    }

    fn decode(bytes: &[u8]) -> Self {
        Vec3::new(read_f32(bytes, 0), read_f32(bytes, 1), read_f32(bytes, 2))
    }
}

impl Element for Vec4 {
    const KIND: ElementKind = ElementKind::Vec4;

    fn encode(&self, out: &mut [u8]) {
        for (index, value) in self.to_array().into_iter().enumerate() {
            codec::put_f32(out, index, value);
        }
    }

    fn decode(bytes: &[u8]) -> Self {
        Vec4::new(
            read_f32(bytes, 0),
            read_f32(bytes, 1),
            read_f32(bytes, 2),
            read_f32(bytes, 3),
        )
    }
}

fn read_f32(bytes: &[u8], index: usize) -> f32 {
    codec::decode_f32(codec::word(bytes, index))
}
