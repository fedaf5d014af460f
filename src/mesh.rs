//! Indexed triangle meshes persisted through the array format.
//!
//! A mesh file is two legacy arrays back to back: the `vec3` positions
//! followed by the `u32` element indices.

use crate::error::{Error, Result};
use crate::io;
use crate::ser::{self, ByteBuffer, ByteReader};
use crate::vector::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        let mesh = Self { positions, indices };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Every index must address an existing position.
    pub fn validate(&self) -> Result<()> {
        let len = self.positions.len() as u64;
        match self.indices.iter().find(|&&index| u64::from(index) >= len) {
            Some(&index) => Err(Error::index_out_of_range("vertex", index.into(), len)),
            None => Ok(()),
        }
    }

    pub fn to_bytes(&self) -> Result<ByteBuffer> {
        let mut out = Vec::new();
        ser::write_array(&mut out, &self.positions)?;
        ser::write_array(&mut out, &self.indices)?;
        Ok(ByteBuffer::from_vec(out))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = ByteReader::new(bytes);
        let positions = ser::read_array::<Vec3>(&mut cursor, "positions")?;
        let indices = ser::read_array::<u32>(&mut cursor, "indices")?;
        ser::ensure_consumed(&cursor)?;
        Self::new(positions, indices)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.validate()?;
        io::write_binary(path, self.to_bytes()?.as_slice())?;
        debug!(
            path = %path.display(),
            vertices = self.positions.len(),
            indices = self.indices.len(),
            "saved mesh"
        );
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(&io::read_binary(path)?)
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
