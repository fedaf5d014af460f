//! Whole-file binary and text reads and writes.

use crate::config::FormatConfig;
use crate::error::{Error, Result};
use crate::ser::{self, Element};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Reads the whole file at `path`.
pub fn read_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| Error::unopenable_file(path, source))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| Error::io(path, source))?;
    debug!(path = %path.display(), len = bytes.len(), "read binary file");
    Ok(bytes)
}

/// Creates or truncates the file at `path` and writes exactly `bytes`.
pub fn write_binary(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|source| Error::unopenable_file(path, source))?;
    file.write_all(bytes)
        .map_err(|source| Error::io(path, source))?;
    file.sync_all()
        .map_err(|source| Error::uncloseable_file(path, source))?;
    debug!(path = %path.display(), len = bytes.len(), "wrote binary file");
    Ok(())
}

/// Reads the whole file at `path` as UTF-8 text.
pub fn read_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| Error::unopenable_file(path, source))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|source| Error::io(path, source))?;
    Ok(text)
}

pub fn write_string(path: impl AsRef<Path>, text: &str) -> Result<()> {
    write_binary(path, text.as_bytes())
}

/// Serializes `array` with the framing of `config` and writes it to `path`.
pub fn save_array<T: Element>(
    path: impl AsRef<Path>,
    array: &[T],
    config: &FormatConfig,
) -> Result<()> {
    let buffer = ser::encode_framed(array, config)?;
    write_binary(path, buffer.as_slice())
}

/// Reads `path` and deserializes it with the framing of `config`.
pub fn load_array<T: Element>(
    path: impl AsRef<Path>,
    config: &FormatConfig,
) -> Result<(Vec<T>, u64)> {
    let bytes = read_binary(path)?;
    ser::decode_framed(&bytes, config)
}
