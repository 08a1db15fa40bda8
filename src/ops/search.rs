//! Searches and predicates.

use crate::error::Result;
use crate::value::Value;
use crate::view::wrap_sequence;

/// Position of the first element equal to `needle` at or after `from`, or
/// `-1` if there is none.
pub fn index_of(value: &Value, needle: &Value, from: usize) -> Result<i64> {
    let view = wrap_sequence(value)?;
    for i in from..view.len() {
        if view.at(i) == *needle {
            return Ok(i as i64);
        }
    }
    Ok(-1)
}

/// Position of the last element equal to `needle`, or `-1` if there is
/// none.
pub fn last_index_of(value: &Value, needle: &Value) -> Result<i64> {
    let view = wrap_sequence(value)?;
    for i in (0..view.len()).rev() {
        if view.at(i) == *needle {
            return Ok(i as i64);
        }
    }
    Ok(-1)
}

/// True if the predicate holds for at least one element.
pub fn some<F>(value: &Value, mut pred: F) -> Result<bool>
where
    F: FnMut(&Value, usize) -> bool,
{
    let view = wrap_sequence(value)?;
    for i in 0..view.len() {
        if pred(&view.at(i), i) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// True if the predicate holds for every element.
pub fn every<F>(value: &Value, mut pred: F) -> Result<bool>
where
    F: FnMut(&Value, usize) -> bool,
{
    let view = wrap_sequence(value)?;
    for i in 0..view.len() {
        if !pred(&view.at(i), i) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// True if both sequences have the same length and equal elements at every
/// position.
pub fn equals(value: &Value, other: &Value) -> Result<bool> {
    let a = wrap_sequence(value)?;
    let b = wrap_sequence(other)?;
    if a.len() != b.len() {
        return Ok(false);
    }
    for i in 0..a.len() {
        if a.at(i) != b.at(i) {
            return Ok(false);
        }
    }
    Ok(true)
}
