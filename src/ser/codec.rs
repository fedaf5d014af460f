//! Fixed-width value encoding in the target's native byte order.
//!
//! This is the single conversion point between in-memory values and their
//! serialized bytes. Floats travel by bit pattern, so NaN payloads and signed
//! zeros survive a round trip.

use super::cursor::ByteReader;
use super::element::Element;
use crate::error::Result;

/// Width of the element-count prefix.
pub const LENGTH_PREFIX_SIZE: usize = 8;

/// Width of one `f32` component.
pub const WORD_SIZE: usize = 4;

/// Encodes a length prefix in native byte order.
pub fn encode_u64(value: u64) -> [u8; LENGTH_PREFIX_SIZE] {
    value.to_ne_bytes()
}

/// Decodes a native-order length prefix.
pub fn decode_u64(bytes: [u8; LENGTH_PREFIX_SIZE]) -> u64 {
    u64::from_ne_bytes(bytes)
}

/// Encodes a `u32` in native byte order.
pub fn encode_u32(value: u32) -> [u8; WORD_SIZE] {
    value.to_ne_bytes()
}

/// Decodes a native-order `u32`.
pub fn decode_u32(bytes: [u8; WORD_SIZE]) -> u32 {
    u32::from_ne_bytes(bytes)
}

/// Encodes an `f32` by its bit pattern in native byte order.
pub fn encode_f32(value: f32) -> [u8; WORD_SIZE] {
    encode_u32(value.to_bits())
}

/// Decodes an `f32` from its native-order bit pattern.
pub fn decode_f32(bytes: [u8; WORD_SIZE]) -> f32 {
    f32::from_bits(decode_u32(bytes))
}

/// Writes `value` into `out`, which must be exactly `T::WIDTH` bytes long.
pub fn encode_element<T: Element>(value: &T, out: &mut [u8]) {
    value.encode(out);
}

/// Reads a `T` from `bytes`, which must be exactly `T::WIDTH` bytes long.
pub fn decode_element<T: Element>(bytes: &[u8]) -> T {
    T::decode(bytes)
}

/// Appends a `u64` to the output buffer.
pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&encode_u64(value));
}

/// Appends a single byte to the output buffer.
pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

/// Reads a `u64` from the cursor.
pub fn read_u64(cursor: &mut ByteReader<'_>, field: &'static str) -> Result<u64> {
    cursor.read_array::<LENGTH_PREFIX_SIZE>(field).map(decode_u64)
}

/// Reads a single byte from the cursor.
pub fn read_u8(cursor: &mut ByteReader<'_>, field: &'static str) -> Result<u8> {
    Ok(cursor.read_array::<1>(field)?[0])
}

/// Copies the `index`-th 4-byte word out of `bytes`.
pub(crate) fn word(bytes: &[u8], index: usize) -> [u8; WORD_SIZE] {
    let start = index * WORD_SIZE;
    let mut out = [0u8; WORD_SIZE];
    out.copy_from_slice(&bytes[start..start + WORD_SIZE]);
    out
}

/// Writes `value` as the `index`-th 4-byte word of `out`.
pub(crate) fn put_f32(out: &mut [u8], index: usize, value: f32) {
    let start = index * WORD_SIZE;
    out[start..start + WORD_SIZE].copy_from_slice(&encode_f32(value));
}
