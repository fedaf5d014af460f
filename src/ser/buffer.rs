//! Owned byte buffers and the handle that guards their lifecycle.

use crate::error::{Error, Result};

/// Owned, contiguous bytes produced by the serializer or read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Allocates a zero-filled buffer of `size` bytes.
    ///
    /// The reservation is fallible: heap exhaustion, or a size that does not
    /// fit the address space, is reported as [`Error::AllocFail`].
    #[track_caller]
    pub fn create(size: u64) -> Result<Self> {
        let Ok(len) = usize::try_from(size) else {
            return Err(Error::alloc_fail("byte", size));
        };
        let mut bytes = Vec::new();
        if bytes.try_reserve_exact(len).is_err() {
            return Err(Error::alloc_fail("byte", size));
        }
        bytes.resize(len, 0);
        Ok(Self { bytes })
    }

    /// Wraps bytes that are already owned.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` when the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows the bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrows the bytes mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Consumes the buffer and returns its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

/// A handle that holds at most one [`ByteBuffer`].
///
/// Creating into an occupied slot fails with [`Error::ParamNotNull`] and
/// destroying an empty slot fails with [`Error::ParamNull`], so a leaked or
/// doubly released buffer is reported at the call site.
#[derive(Debug, Default)]
pub struct BufferSlot {
    buffer: Option<ByteBuffer>,
}

impl BufferSlot {
    /// A slot holding nothing.
    pub const fn empty() -> Self {
        Self { buffer: None }
    }

    /// Returns `true` when no buffer is held.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_none()
    }

    /// Allocates `size` zeroed bytes into the slot.
    #[track_caller]
    pub fn create(&mut self, size: u64) -> Result<()> {
        if self.buffer.is_some() {
            return Err(Error::param_not_null("buffer"));
        }
        self.buffer = Some(ByteBuffer::create(size)?);
        Ok(())
    }

    /// Moves an existing buffer into the empty slot.
    #[track_caller]
    pub fn fill(&mut self, buffer: ByteBuffer) -> Result<()> {
        if self.buffer.is_some() {
            return Err(Error::param_not_null("buffer"));
        }
        self.buffer = Some(buffer);
        Ok(())
    }

    /// Releases the held buffer and leaves the slot empty.
    #[track_caller]
    pub fn destroy(&mut self) -> Result<()> {
        match self.buffer.take() {
            Some(buffer) => {
                drop(buffer);
                Ok(())
            }
            None => Err(Error::param_null("buffer")),
        }
    }

    /// Transfers ownership of the held buffer to the caller.
    pub fn take(&mut self) -> Option<ByteBuffer> {
        self.buffer.take()
    }

    /// Borrows the held buffer, if any.
    pub fn get(&self) -> Option<&ByteBuffer> {
        self.buffer.as_ref()
    }

    /// Borrows the held bytes, if any.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.buffer.as_ref().map(ByteBuffer::as_slice)
    }
}

impl From<ByteBuffer> for BufferSlot {
    fn from(buffer: ByteBuffer) -> Self {
        Self {
            buffer: Some(buffer),
        }
    }
}
