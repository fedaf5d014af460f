//! Crate-wide error type.
//!
//! Every fallible operation returns [`Result`]. Guard and size failures record
//! the source location of the caller that tripped them so the diagnostic names
//! the parameter, the file and the line, and every constructor emits a
//! `tracing` event at `error` level when the error is created.

use crate::ser::ElementKind;
use serde::{Deserialize, Serialize};
use std::panic::Location;
use std::path::{Path, PathBuf};
use tracing::error;

/// Convenient alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Fieldless discriminant of [`Error`], suitable for matching and for the
/// numeric result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    AllocFail,
    ParamNull,
    ParamNotNull,
    ColorUnnorm,
    UnopenableFile,
    UncloseableFile,
    SizeMismatch,
    SizeIndivisible,
    NonPowerOfTwo,
    IndexOutOfRange,
    UnexpectedEnd,
    TrailingBytes,
    UnknownTag,
    KindMismatch,
    UnknownByteOrder,
    LimitExceeded,
    Io,
    Config,
}

impl ErrorKind {
    /// Numeric result code. Each kind owns a single bit of a negative value,
    /// so codes from different call sites can be OR-ed into a summary.
    pub const fn code(self) -> i32 {
        let shift = match self {
            ErrorKind::AllocFail => 0,
            ErrorKind::ParamNull => 1,
            ErrorKind::ParamNotNull => 2,
            ErrorKind::ColorUnnorm => 3,
            ErrorKind::UnopenableFile => 4,
            ErrorKind::UncloseableFile => 5,
            ErrorKind::SizeMismatch => 6,
            ErrorKind::SizeIndivisible => 7,
            // 8 was the image decoder failure, 10..=13 belong to window,
            // loader, enum and shader failures of the GL layer.
            ErrorKind::NonPowerOfTwo => 9,
            ErrorKind::IndexOutOfRange => 14,
            ErrorKind::UnexpectedEnd => 15,
            ErrorKind::TrailingBytes => 16,
            ErrorKind::UnknownTag => 17,
            ErrorKind::KindMismatch => 18,
            ErrorKind::UnknownByteOrder => 19,
            ErrorKind::LimitExceeded => 20,
            ErrorKind::Io => 21,
            ErrorKind::Config => 22,
        };
        -1 << shift
    }
}

/// Error surfaced by every fallible operation of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required parameter was absent.
    #[error("parameter {name} cannot be null ({location})")]
    ParamNull {
        name: &'static str,
        location: &'static Location<'static>,
    },
    /// An output slot that must be empty already held a value.
    #[error("parameter {name} must be null ({location})")]
    ParamNotNull {
        name: &'static str,
        location: &'static Location<'static>,
    },
    /// Heap reservation failed or the requested size overflowed.
    #[error("failed to allocate memory for {what} of size {size} ({location})")]
    AllocFail {
        what: &'static str,
        size: u64,
        location: &'static Location<'static>,
    },
    /// A buffer length disagrees with what its header announces.
    #[error("size of {actual} does not match size of {expected} ({location})")]
    SizeMismatch {
        expected: u64,
        actual: u64,
        location: &'static Location<'static>,
    },
    /// A dimension is not a whole multiple of its cell size.
    #[error("size of {size} is not divisible by {divisor} ({location})")]
    SizeIndivisible {
        size: u64,
        divisor: u64,
        location: &'static Location<'static>,
    },
    /// A texture dimension failed the power-of-two check.
    #[error("{name} of {size} is not a power of two ({location})")]
    NonPowerOfTwo {
        name: &'static str,
        size: u32,
        location: &'static Location<'static>,
    },
    /// An index points past the end of the collection it addresses.
    #[error("{name} index {index} is out of range for length {len}")]
    IndexOutOfRange {
        name: &'static str,
        index: u64,
        len: u64,
    },
    /// A color component was outside `0.0..=1.0`.
    #[error("{component} component of color was passed unnormalized float {value}")]
    ColorUnnorm { component: &'static str, value: f32 },
    /// Input ended before the expected number of bytes were read.
    #[error("unexpected end of input reading {field}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },
    /// Bytes remained after the expected payload was consumed.
    #[error("{remaining} trailing bytes after offset {consumed}")]
    TrailingBytes { consumed: usize, remaining: usize },
    /// The tagged header carried a tag no element kind owns.
    #[error("unknown element kind tag {tag}")]
    UnknownTag { tag: u8 },
    /// The tagged header names a different element kind than requested.
    #[error("expected {expected} elements, buffer holds {found} elements")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
    /// The tagged header carried an unknown byte-order marker.
    #[error("unknown byte order marker {marker}")]
    UnknownByteOrder { marker: u8 },
    /// An element count exceeded the configured bound.
    #[error("element count {count} exceeds limit of {limit}")]
    LimitExceeded { count: u64, limit: u64 },
    /// A file could not be opened.
    #[error("failed to open file {}", path.display())]
    UnopenableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A written file could not be flushed and closed.
    #[error("failed to close file {}", path.display())]
    UncloseableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading or writing an open file failed.
    #[error("i/o failure on file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
}

impl Error {
    #[track_caller]
    pub fn param_null(name: &'static str) -> Self {
        let location = Location::caller();
        error!(param = name, %location, "parameter cannot be null");
        Error::ParamNull { name, location }
    }

    #[track_caller]
    pub fn param_not_null(name: &'static str) -> Self {
        let location = Location::caller();
        error!(param = name, %location, "parameter must be null");
        Error::ParamNotNull { name, location }
    }

    #[track_caller]
    pub fn alloc_fail(what: &'static str, size: u64) -> Self {
        let location = Location::caller();
        error!(what, size, %location, "failed to allocate memory");
        Error::AllocFail {
            what,
            size,
            location,
        }
    }

    #[track_caller]
    pub fn size_mismatch(expected: u64, actual: u64) -> Self {
        let location = Location::caller();
        error!(expected, actual, %location, "size mismatch");
        Error::SizeMismatch {
            expected,
            actual,
            location,
        }
    }

    #[track_caller]
    pub fn size_indivisible(size: u64, divisor: u64) -> Self {
        let location = Location::caller();
        error!(size, divisor, %location, "size is not divisible");
        Error::SizeIndivisible {
            size,
            divisor,
            location,
        }
    }

    #[track_caller]
    pub fn non_power_of_two(name: &'static str, size: u32) -> Self {
        let location = Location::caller();
        error!(param = name, size, %location, "size is not a power of two");
        Error::NonPowerOfTwo {
            name,
            size,
            location,
        }
    }

    pub fn index_out_of_range(name: &'static str, index: u64, len: u64) -> Self {
        error!(param = name, index, len, "index out of range");
        Error::IndexOutOfRange { name, index, len }
    }

    pub fn color_unnorm(component: &'static str, value: f32) -> Self {
        error!(component, value, "color component is not normalized");
        Error::ColorUnnorm { component, value }
    }

    pub fn unexpected_end(field: &'static str, needed: usize, remaining: usize) -> Self {
        error!(field, needed, remaining, "unexpected end of input");
        Error::UnexpectedEnd {
            field,
            needed,
            remaining,
        }
    }

    pub fn trailing_bytes(consumed: usize, remaining: usize) -> Self {
        error!(consumed, remaining, "trailing bytes after payload");
        Error::TrailingBytes {
            consumed,
            remaining,
        }
    }

    pub fn unknown_tag(tag: u8) -> Self {
        error!(tag, "unknown element kind tag");
        Error::UnknownTag { tag }
    }

    pub fn kind_mismatch(expected: ElementKind, found: ElementKind) -> Self {
        error!(%expected, %found, "element kind mismatch");
        Error::KindMismatch { expected, found }
    }

    pub fn unknown_byte_order(marker: u8) -> Self {
        error!(marker, "unknown byte order marker");
        Error::UnknownByteOrder { marker }
    }

    pub fn limit_exceeded(count: u64, limit: u64) -> Self {
        error!(count, limit, "element count exceeds limit");
        Error::LimitExceeded { count, limit }
    }

    pub fn unopenable_file(path: &Path, source: std::io::Error) -> Self {
        error!(path = %path.display(), %source, "failed to open file");
        Error::UnopenableFile {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn uncloseable_file(path: &Path, source: std::io::Error) -> Self {
        error!(path = %path.display(), %source, "failed to close file");
        Error::UncloseableFile {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        error!(path = %path.display(), %source, "file i/o failure");
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(source: serde_json::Error) -> Self {
        error!(%source, "invalid configuration");
        Error::Config(source)
    }

    /// Returns the fieldless discriminant of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ParamNull { .. } => ErrorKind::ParamNull,
            Error::ParamNotNull { .. } => ErrorKind::ParamNotNull,
            Error::AllocFail { .. } => ErrorKind::AllocFail,
            Error::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            Error::SizeIndivisible { .. } => ErrorKind::SizeIndivisible,
            Error::NonPowerOfTwo { .. } => ErrorKind::NonPowerOfTwo,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::ColorUnnorm { .. } => ErrorKind::ColorUnnorm,
            Error::UnexpectedEnd { .. } => ErrorKind::UnexpectedEnd,
            Error::TrailingBytes { .. } => ErrorKind::TrailingBytes,
            Error::UnknownTag { .. } => ErrorKind::UnknownTag,
            Error::KindMismatch { .. } => ErrorKind::KindMismatch,
            Error::UnknownByteOrder { .. } => ErrorKind::UnknownByteOrder,
            Error::LimitExceeded { .. } => ErrorKind::LimitExceeded,
            Error::UnopenableFile { .. } => ErrorKind::UnopenableFile,
            Error::UncloseableFile { .. } => ErrorKind::UncloseableFile,
            Error::Io { .. } => ErrorKind::Io,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// Numeric result code of the error, see [`ErrorKind::code`].
    pub fn code(&self) -> i32 {
        self.kind().code()
    }

    /// Source location that raised a guard or size error, when recorded.
    pub fn location(&self) -> Option<&'static Location<'static>> {
        match self {
            Error::ParamNull { location, .. }
            | Error::ParamNotNull { location, .. }
            | Error::AllocFail { location, .. }
            | Error::SizeMismatch { location, .. }
            | Error::SizeIndivisible { location, .. }
            | Error::NonPowerOfTwo { location, .. } => Some(*location),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_legacy_bit_layout() {
        assert_eq!(ErrorKind::AllocFail.code(), -1);
        assert_eq!(ErrorKind::ParamNull.code(), -2);
        assert_eq!(ErrorKind::ParamNotNull.code(), -4);
        assert_eq!(ErrorKind::SizeMismatch.code(), -64);
        assert_eq!(ErrorKind::SizeIndivisible.code(), -128);
    }

    #[test]
    fn guard_errors_record_caller_location() {
        let err = Error::param_null("buffer");
        let location = err.location().expect("guard errors carry a location");
        assert_eq!(location.file(), file!());
        assert!(err.to_string().contains("parameter buffer cannot be null"));
    }

    #[test]
    fn io_errors_have_no_location() {
        let err = Error::io(
            Path::new("missing.bin"),
            std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.location().is_none());
    }
}
