use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Byte order of multi-byte values inside a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the running target.
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// One-byte marker stored in the tagged header.
    pub const fn marker(self) -> u8 {
        match self {
            Endianness::Little => 0,
            Endianness::Big => 1,
        }
    }

    /// Parses a header marker.
    pub fn from_marker(marker: u8) -> Result<Self> {
        match marker {
            0 => Ok(Endianness::Little),
            1 => Ok(Endianness::Big),
            other => Err(Error::unknown_byte_order(other)),
        }
    }

    pub const fn is_native(self) -> bool {
        self.marker() == Self::native().marker()
    }
}

/// Reverses every `word`-byte group of `bytes` in place.
///
/// `bytes.len()` must be a multiple of `word`; a short tail is left as is.
pub fn swap_words(bytes: &mut [u8], word: usize) {
    for chunk in bytes.chunks_exact_mut(word) {
        chunk.reverse();
    }
}
