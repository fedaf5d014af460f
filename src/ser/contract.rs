//! Handle-based entry points for callers that manage their own slots.
//!
//! These mirror the in/out parameter contract of the array functions: a
//! required input that is absent fails with [`Error::ParamNull`], an output
//! slot that already holds a value fails with [`Error::ParamNotNull`] and is
//! left untouched. Inputs are checked before outputs and before any
//! allocation. A failure after the checks leaves the output slot empty.

use super::array::{deserialize, serialize};
use super::buffer::BufferSlot;
use super::element::Element;
use crate::error::{Error, Result};

/// Serializes `array` into the empty slot `out`.
#[track_caller]
pub fn serialize_into<T: Element>(out: &mut BufferSlot, array: Option<&[T]>) -> Result<()> {
    let Some(array) = array else {
        return Err(Error::param_null("array"));
    };
    if !out.is_empty() {
        return Err(Error::param_not_null("buffer"));
    }
    out.fill(serialize(array)?)
}

/// Deserializes `buffer` into the empty slot `out` and returns the element count.
#[track_caller]
pub fn deserialize_into<T: Element>(
    out: &mut Option<Vec<T>>,
    buffer: Option<&[u8]>,
) -> Result<u64> {
    let Some(buffer) = buffer else {
        return Err(Error::param_null("buffer"));
    };
    if out.is_some() {
        return Err(Error::param_not_null("array"));
    }
    let (array, count) = deserialize(buffer)?;
    *out = Some(array);
    Ok(count)
}

/// Releases the array held by `slot`, leaving it empty.
#[track_caller]
pub fn release_array<T>(slot: &mut Option<Vec<T>>) -> Result<()> {
    match slot.take() {
        Some(array) => {
            drop(array);
            Ok(())
        }
        None => Err(Error::param_null("array")),
    }
}
