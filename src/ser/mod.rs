//! Binary array format and the buffer ownership helpers built around it.
//!
//! Arrays of `f32`, `u32` and 2/3/4-component `f32` vectors are stored as a
//! `u64` element count followed by the elements, all in the target's native
//! byte order (see [`array`]). The tagged framing in [`tagged`] adds an element
//! kind and a byte-order marker for buffers that leave the machine.

pub mod array;
mod buffer;
mod codec;
mod contract;
mod cursor;
mod element;
mod endian;
pub mod tagged;

pub use array::{
    deserialize, deserialize_f32s, deserialize_u32s, deserialize_vec2s, deserialize_vec3s,
    deserialize_vec4s, deserialize_with, encoded_len, read_array, serialize, serialize_f32s,
    serialize_u32s, serialize_vec2s, serialize_vec3s, serialize_vec4s, write_array,
};
pub use buffer::{BufferSlot, ByteBuffer};
pub use codec::{
    decode_element, decode_f32, decode_u32, decode_u64, encode_element, encode_f32, encode_u32,
    encode_u64, read_u64, read_u8, write_u64, write_u8, LENGTH_PREFIX_SIZE, WORD_SIZE,
};
pub use contract::{deserialize_into, release_array, serialize_into};
pub use cursor::{ensure_consumed, ByteReader};
pub use element::{Element, ElementKind};
pub use endian::{swap_words, Endianness};
pub use tagged::{
    decode_framed, deserialize_any, deserialize_any_with, deserialize_tagged,
    deserialize_tagged_with, encode_framed, peek_kind, serialize_tagged, serialize_tagged_as,
    AnyArray, TaggedHeader, TAGGED_HEADER_SIZE,
};
