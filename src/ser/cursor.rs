use crate::error::{Error, Result};

/// Forward-only reader over a serialized buffer.
///
/// Every read names the field it is decoding so a short buffer reports what
/// was missing, how many bytes it needed and how many were left.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    /// Starts reading at the first byte.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// The unread tail. Does not advance.
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn read_exact(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(Error::unexpected_end(field, len, remaining));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Reads the next `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_exact(N, field)?);
        Ok(out)
    }
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteReader::new(bytes)
    }
}

/// Fails with [`Error::TrailingBytes`] unless the reader is at the end.
pub fn ensure_consumed(cursor: &ByteReader<'_>) -> Result<()> {
    match cursor.remaining() {
        0 => Ok(()),
        remaining => Err(Error::trailing_bytes(cursor.position(), remaining)),
    }
}
