//! Self-describing framing for element arrays.
//!
//! | Offset | Field | Encoding |
//! |--------|-------|----------|
//! | 0 | `kind` | `u8` element kind tag |
//! | 1 | `byte_order` | `u8`, `0` little / `1` big |
//! | 2..10 | `element_count` | `u64` in `byte_order` |
//! | 10.. | elements | `element_count * width(kind)` bytes in `byte_order` |
//!
//! Decoding with the wrong element type is an error instead of garbage, and a
//! buffer written on a target of the other byte order is converted on read.

use super::array::{decode_counted, encode_payload, framed_len};
use super::buffer::ByteBuffer;
use super::codec::{self, LENGTH_PREFIX_SIZE, WORD_SIZE};
use super::cursor::ByteReader;
use super::element::{Element, ElementKind};
use super::endian::{swap_words, Endianness};
use crate::config::{FormatConfig, Framing};
use crate::error::{Error, Result};
use crate::vector::{Vec2, Vec3, Vec4};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Size of the tagged header preceding the payload.
pub const TAGGED_HEADER_SIZE: usize = 2 + LENGTH_PREFIX_SIZE;

/// Decoded tagged header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedHeader {
    pub kind: ElementKind,
    pub byte_order: Endianness,
    pub count: u64,
}

impl TaggedHeader {
    /// Reads and validates a header, leaving the cursor at the payload.
    pub fn read(cursor: &mut ByteReader<'_>) -> Result<Self> {
        let kind = ElementKind::from_tag(codec::read_u8(cursor, "kind")?)?;
        let byte_order = Endianness::from_marker(codec::read_u8(cursor, "byte_order")?)?;
        let mut raw = cursor.read_array::<LENGTH_PREFIX_SIZE>("element_count")?;
        if !byte_order.is_native() {
            raw.reverse();
        }
        Ok(Self {
            kind,
            byte_order,
            count: codec::decode_u64(raw),
        })
    }
}

/// Returns the element kind named by a tagged buffer without decoding it.
pub fn peek_kind(buffer: &[u8]) -> Result<ElementKind> {
    let mut cursor = ByteReader::new(buffer);
    ElementKind::from_tag(codec::read_u8(&mut cursor, "kind")?)
}

/// Serializes `array` with a tagged header in native byte order.
pub fn serialize_tagged<T: Element>(array: &[T]) -> Result<ByteBuffer> {
    serialize_tagged_as(array, Endianness::native())
}

/// Serializes `array` with a tagged header, writing count and payload in
/// `byte_order`.
pub fn serialize_tagged_as<T: Element>(
    array: &[T],
    byte_order: Endianness,
) -> Result<ByteBuffer> {
    let count = array.len() as u64;
    let Some(size) = framed_len::<T>(TAGGED_HEADER_SIZE, count) else {
        return Err(Error::alloc_fail(T::KIND.name(), u64::MAX));
    };
    let mut buffer = ByteBuffer::create(size)?;
    let bytes = buffer.as_mut_slice();
    bytes[0] = T::KIND.tag();
    bytes[1] = byte_order.marker();
    bytes[2..TAGGED_HEADER_SIZE].copy_from_slice(&codec::encode_u64(count));
    encode_payload(array, &mut bytes[TAGGED_HEADER_SIZE..]);
    if !byte_order.is_native() {
        swap_words(&mut bytes[2..TAGGED_HEADER_SIZE], LENGTH_PREFIX_SIZE);
        swap_words(&mut bytes[TAGGED_HEADER_SIZE..], WORD_SIZE);
    }
    debug!(kind = %T::KIND, count, len = size, ?byte_order, "serialized tagged array");
    Ok(buffer)
}

/// Deserializes a tagged buffer using the default element limit.
pub fn deserialize_tagged<T: Element>(buffer: &[u8]) -> Result<(Vec<T>, u64)> {
    deserialize_tagged_with(buffer, &FormatConfig::default())
}

/// Deserializes a tagged buffer whose tag must name `T`.
pub fn deserialize_tagged_with<T: Element>(
    buffer: &[u8],
    config: &FormatConfig,
) -> Result<(Vec<T>, u64)> {
    let mut cursor = ByteReader::new(buffer);
    let header = TaggedHeader::read(&mut cursor)?;
    if header.kind != T::KIND {
        return Err(Error::kind_mismatch(T::KIND, header.kind));
    }
    let payload = normalize(cursor.rest(), header.byte_order)?;
    let array = decode_counted::<T>(
        &payload,
        header.count,
        TAGGED_HEADER_SIZE,
        config.max_elements,
    )?;
    debug!(
        kind = %T::KIND,
        count = header.count,
        len = buffer.len(),
        "deserialized tagged array"
    );
    Ok((array, header.count))
}

fn normalize(payload: &[u8], byte_order: Endianness) -> Result<Cow<'_, [u8]>> {
    if byte_order.is_native() {
        return Ok(Cow::Borrowed(payload));
    }
    warn!(?byte_order, len = payload.len(), "converting foreign byte order payload");
    let mut owned = Vec::new();
    if owned.try_reserve_exact(payload.len()).is_err() {
        return Err(Error::alloc_fail("byte", payload.len() as u64));
    }
    owned.extend_from_slice(payload);
    // Every element kind is built from 4-byte words.
    swap_words(&mut owned, WORD_SIZE);
    Ok(Cow::Owned(owned))
}

/// An array of any element kind, as produced by [`deserialize_any`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnyArray {
    F32(Vec<f32>),
    U32(Vec<u32>),
    Vec2(Vec<Vec2>),
    Vec3(Vec<Vec3>),
    Vec4(Vec<Vec4>),
}

impl AnyArray {
    /// Element kind of the contained array.
    pub fn kind(&self) -> ElementKind {
        match self {
            AnyArray::F32(_) => ElementKind::F32,
            AnyArray::U32(_) => ElementKind::U32,
            AnyArray::Vec2(_) => ElementKind::Vec2,
            AnyArray::Vec3(_) => ElementKind::Vec3,
            AnyArray::Vec4(_) => ElementKind::Vec4,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            AnyArray::F32(values) => values.len(),
            AnyArray::U32(values) => values.len(),
            AnyArray::Vec2(values) => values.len(),
            AnyArray::Vec3(values) => values.len(),
            AnyArray::Vec4(values) => values.len(),
        }
    }

    /// Returns `true` when the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-encodes the array with a tagged header in native byte order.
    pub fn serialize_tagged(&self) -> Result<ByteBuffer> {
        match self {
            AnyArray::F32(values) => serialize_tagged(values),
            AnyArray::U32(values) => serialize_tagged(values),
            AnyArray::Vec2(values) => serialize_tagged(values),
            AnyArray::Vec3(values) => serialize_tagged(values),
            AnyArray::Vec4(values) => serialize_tagged(values),
        }
    }
}

/// Decodes a tagged buffer of whatever kind its header names.
pub fn deserialize_any(buffer: &[u8]) -> Result<AnyArray> {
    deserialize_any_with(buffer, &FormatConfig::default())
}

/// Decodes a tagged buffer of any kind, enforcing `config.max_elements`.
pub fn deserialize_any_with(buffer: &[u8], config: &FormatConfig) -> Result<AnyArray> {
    Ok(match peek_kind(buffer)? {
        ElementKind::F32 => AnyArray::F32(deserialize_tagged_with(buffer, config)?.0),
        ElementKind::U32 => AnyArray::U32(deserialize_tagged_with(buffer, config)?.0),
        ElementKind::Vec2 => AnyArray::Vec2(deserialize_tagged_with(buffer, config)?.0),
        ElementKind::Vec3 => AnyArray::Vec3(deserialize_tagged_with(buffer, config)?.0),
        ElementKind::Vec4 => AnyArray::Vec4(deserialize_tagged_with(buffer, config)?.0),
    })
}

/// Serializes `array` with the framing selected by `config`.
pub fn encode_framed<T: Element>(array: &[T], config: &FormatConfig) -> Result<ByteBuffer> {
    match config.framing {
        Framing::Legacy => super::array::serialize(array),
        Framing::Tagged => serialize_tagged(array),
    }
}

/// Deserializes `buffer` with the framing selected by `config`.
pub fn decode_framed<T: Element>(
    buffer: &[u8],
    config: &FormatConfig,
) -> Result<(Vec<T>, u64)> {
    match config.framing {
        Framing::Legacy => super::array::deserialize_with(buffer, config),
        Framing::Tagged => deserialize_tagged_with(buffer, config),
    }
}
