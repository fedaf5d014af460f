//! Length-prefixed arrays of fixed-width elements.
//!
//! | Offset | Field | Encoding |
//! |--------|-------|----------|
//! | 0..8 | `element_count` | `u64`, native order |
//! | 8.. | elements | `element_count * width(T)` bytes, native order, no padding |
//!
//! A buffer of `N` elements of width `W` is exactly `8 + N * W` bytes long.
//! Decoders check that equality before touching the payload.

use super::buffer::ByteBuffer;
use super::codec::{self, LENGTH_PREFIX_SIZE};
use super::cursor::ByteReader;
use super::element::Element;
use crate::config::FormatConfig;
use crate::error::{Error, Result};
#[cfg(feature = "parallel")]
use crate::utils;
use crate::vector::{Vec2, Vec3, Vec4};
use tracing::debug;

/// Total length of a buffer holding `count` elements behind a `header`-byte
/// header, or `None` when the computation overflows.
pub fn framed_len<T: Element>(header: usize, count: u64) -> Option<u64> {
    count
        .checked_mul(T::WIDTH as u64)?
        .checked_add(header as u64)
}

/// Length of the legacy encoding of `count` elements of `T`.
pub fn encoded_len<T: Element>(count: u64) -> Option<u64> {
    framed_len::<T>(LENGTH_PREFIX_SIZE, count)
}

/// Serializes `array` into a newly allocated `[count][elements]` buffer.
///
/// The caller owns the returned buffer. The input is not modified.
pub fn serialize<T: Element>(array: &[T]) -> Result<ByteBuffer> {
    let count = array.len() as u64;
    let Some(size) = encoded_len::<T>(count) else {
        return Err(Error::alloc_fail(T::KIND.name(), u64::MAX));
    };
    let mut buffer = ByteBuffer::create(size)?;
    let bytes = buffer.as_mut_slice();
    bytes[..LENGTH_PREFIX_SIZE].copy_from_slice(&codec::encode_u64(count));
    encode_payload(array, &mut bytes[LENGTH_PREFIX_SIZE..]);
    debug!(kind = %T::KIND, count, len = size, "serialized array");
    Ok(buffer)
}

/// Deserializes a legacy buffer using the default element limit.
///
/// Returns the newly allocated array and the element count read from the
/// prefix. The buffer is only borrowed, so it stays with the caller whether
/// or not decoding succeeds.
pub fn deserialize<T: Element>(buffer: &[u8]) -> Result<(Vec<T>, u64)> {
    deserialize_with(buffer, &FormatConfig::default())
}

/// Deserializes a legacy buffer, enforcing `config.max_elements`.
pub fn deserialize_with<T: Element>(
    buffer: &[u8],
    config: &FormatConfig,
) -> Result<(Vec<T>, u64)> {
    let mut cursor = ByteReader::new(buffer);
    let count = codec::read_u64(&mut cursor, "element_count")?;
    let array =
        decode_counted::<T>(cursor.rest(), count, LENGTH_PREFIX_SIZE, config.max_elements)?;
    debug!(kind = %T::KIND, count, len = buffer.len(), "deserialized array");
    Ok((array, count))
}

/// Validates `payload` against `count` and decodes it.
///
/// `header` is the number of bytes that preceded the payload in the full
/// buffer and only feeds the reported sizes.
pub(crate) fn decode_counted<T: Element>(
    payload: &[u8],
    count: u64,
    header: usize,
    max_elements: u64,
) -> Result<Vec<T>> {
    let actual = (header + payload.len()) as u64;
    match framed_len::<T>(header, count) {
        Some(expected) if expected == actual => {}
        Some(expected) => return Err(Error::size_mismatch(expected, actual)),
        None => return Err(Error::size_mismatch(u64::MAX, actual)),
    }
    if count > max_elements {
        return Err(Error::limit_exceeded(count, max_elements));
    }

    // The size check above bounds `count` by the payload length.
    let len = count as usize;
    let mut out = Vec::new();
    if out.try_reserve_exact(len).is_err() {
        return Err(Error::alloc_fail(T::KIND.name(), payload.len() as u64));
    }
    decode_payload(payload, &mut out);
    Ok(out)
}

/// Appends the legacy encoding of `array` to `out`.
pub fn write_array<T: Element>(out: &mut Vec<u8>, array: &[T]) -> Result<()> {
    let count = array.len() as u64;
    let Some(size) = encoded_len::<T>(count) else {
        return Err(Error::alloc_fail(T::KIND.name(), u64::MAX));
    };
    let Ok(size) = usize::try_from(size) else {
        return Err(Error::alloc_fail(T::KIND.name(), size));
    };
    if out.try_reserve(size).is_err() {
        return Err(Error::alloc_fail(T::KIND.name(), size as u64));
    }
    codec::write_u64(out, count);
    let start = out.len();
    out.resize(start + size - LENGTH_PREFIX_SIZE, 0);
    encode_payload(array, &mut out[start..]);
    Ok(())
}

/// Reads one legacy-encoded array from the cursor, leaving it positioned
/// after the array's last element.
pub fn read_array<T: Element>(
    cursor: &mut ByteReader<'_>,
    field: &'static str,
) -> Result<Vec<T>> {
    let mut peek = *cursor;
    let count = codec::read_u64(&mut peek, field)?;
    let len = encoded_len::<T>(count)
        .and_then(|len| usize::try_from(len).ok())
        .unwrap_or(usize::MAX);
    let section = cursor.read_exact(len, field)?;
    Ok(deserialize::<T>(section)?.0)
}

fn encode_sequential<T: Element>(array: &[T], out: &mut [u8]) {
    for (chunk, value) in out.chunks_exact_mut(T::WIDTH).zip(array) {
        codec::encode_element(value, chunk);
    }
}

fn decode_sequential<T: Element>(payload: &[u8], out: &mut Vec<T>) {
    out.extend(payload.chunks_exact(T::WIDTH).map(codec::decode_element::<T>));
}

#[cfg(feature = "parallel")]
pub(super) fn encode_payload<T: Element>(array: &[T], out: &mut [u8]) {
    if utils::use_parallel(array.len()) {
        use rayon::prelude::*;
        let chunk = utils::preferred_chunk_size(array.len());
        out.par_chunks_exact_mut(T::WIDTH)
            .zip(array.par_iter())
            .with_min_len(chunk)
            .for_each(|(bytes, value)| codec::encode_element(value, bytes));
    } else {
        encode_sequential(array, out);
    }
}

#[cfg(not(feature = "parallel"))]
pub(super) fn encode_payload<T: Element>(array: &[T], out: &mut [u8]) {
    encode_sequential(array, out);
}

#[cfg(feature = "parallel")]
fn decode_payload<T: Element>(payload: &[u8], out: &mut Vec<T>) {
    let len = payload.len() / T::WIDTH;
    if utils::use_parallel(len) {
        use rayon::prelude::*;
        let chunk = utils::preferred_chunk_size(len);
        payload
            .par_chunks_exact(T::WIDTH)
            .with_min_len(chunk)
            .map(codec::decode_element::<T>)
            .collect_into_vec(out);
    } else {
        decode_sequential(payload, out);
    }
}

#[cfg(not(feature = "parallel"))]
fn decode_payload<T: Element>(payload: &[u8], out: &mut Vec<T>) {
    decode_sequential(payload, out);
}

/// Serializes an `f32` array.
pub fn serialize_f32s(array: &[f32]) -> Result<ByteBuffer> {
    serialize(array)
}

/// Serializes a `u32` array.
pub fn serialize_u32s(array: &[u32]) -> Result<ByteBuffer> {
    serialize(array)
}

/// Serializes a `vec2` array.
pub fn serialize_vec2s(array: &[Vec2]) -> Result<ByteBuffer> {
    serialize(array)
}

/// Serializes a `vec3` array.
pub fn serialize_vec3s(array: &[Vec3]) -> Result<ByteBuffer> {
    serialize(array)
}

/// Serializes a `vec4` array.
pub fn serialize_vec4s(array: &[Vec4]) -> Result<ByteBuffer> {
    serialize(array)
}

/// Deserializes an `f32` array and its element count.
pub fn deserialize_f32s(buffer: &[u8]) -> Result<(Vec<f32>, u64)> {
    deserialize(buffer)
}

/// Deserializes a `u32` array and its element count.
pub fn deserialize_u32s(buffer: &[u8]) -> Result<(Vec<u32>, u64)> {
    deserialize(buffer)
}

/// Deserializes a `vec2` array and its element count.
pub fn deserialize_vec2s(buffer: &[u8]) -> Result<(Vec<Vec2>, u64)> {
    deserialize(buffer)
}

/// Deserializes a `vec3` array and its element count.
pub fn deserialize_vec3s(buffer: &[u8]) -> Result<(Vec<Vec3>, u64)> {
    deserialize(buffer)
}

/// Deserializes a `vec4` array and its element count.
pub fn deserialize_vec4s(buffer: &[u8]) -> Result<(Vec<Vec4>, u64)> {
    deserialize(buffer)
}
