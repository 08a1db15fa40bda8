//! Selection, slicing, and structural operations.

use crate::error::{Error, Result};
use crate::value::Value;
use crate::view::wrap_sequence;

/// First element, or unit if the sequence is empty.
pub fn first(value: &Value) -> Result<Value> {
    let view = wrap_sequence(value)?;
    if view.is_empty() {
        return Ok(Value::Unit);
    }
    Ok(view.at(0))
}

/// Last element, or unit if the sequence is empty.
pub fn last(value: &Value) -> Result<Value> {
    let view = wrap_sequence(value)?;
    if view.is_empty() {
        return Ok(Value::Unit);
    }
    Ok(view.at(view.len() - 1))
}

/// Leading elements through position `end`, inclusive.
///
/// Fails with [`Error::IndexOutOfBounds`] if `end` is not a valid position.
pub fn head(value: &Value, end: usize) -> Result<Value> {
    let view = wrap_sequence(value)?;
    if end >= view.len() {
        return Err(Error::IndexOutOfBounds(end));
    }
    Ok(Value::Seq((0..=end).map(|i| view.at(i)).collect()))
}

/// Trailing elements from position `start` onward.
///
/// Fails with [`Error::IndexOutOfBounds`] if `start` is not a valid
/// position.
pub fn tail(value: &Value, start: usize) -> Result<Value> {
    let view = wrap_sequence(value)?;
    if start >= view.len() {
        return Err(Error::IndexOutOfBounds(start));
    }
    Ok(Value::Seq((start..view.len()).map(|i| view.at(i)).collect()))
}

/// Elements from `start` through `end`, both inclusive.
pub fn slice(value: &Value, start: usize, end: usize) -> Result<Value> {
    let leading = head(value, end)?;
    tail(&leading, start)
}

/// Remove `delete_count` elements at `start` and insert `items` in their
/// place.
///
/// Fails with [`Error::IndexOutOfBounds`] only when `start` is past the end
/// of the sequence; a `delete_count` reaching past the end deletes what is
/// there.
pub fn splice(value: &Value, start: usize, delete_count: usize, items: &[Value]) -> Result<Value> {
    let view = wrap_sequence(value)?;
    if start > view.len() {
        return Err(Error::IndexOutOfBounds(start));
    }
    let mut result: Vec<Value> = (0..start).map(|i| view.at(i)).collect();
    result.extend(items.iter().cloned());
    let resume = start.saturating_add(delete_count).min(view.len());
    result.extend((resume..view.len()).map(|i| view.at(i)));
    Ok(Value::Seq(result))
}

/// Split into groups of `size`; the final group carries the remainder.
///
/// Fails with [`Error::IndexOutOfBounds`] when `size` is zero.
pub fn chunk(value: &Value, size: usize) -> Result<Value> {
    if size == 0 {
        return Err(Error::IndexOutOfBounds(0));
    }
    let view = wrap_sequence(value)?;
    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(size);
    for i in 0..view.len() {
        current.push(view.at(i));
        if current.len() == size {
            chunks.push(Value::Seq(std::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        chunks.push(Value::Seq(current));
    }
    Ok(Value::Seq(chunks))
}

/// Append the elements of `other`.
pub fn concat(value: &Value, other: &Value) -> Result<Value> {
    let mut result = wrap_sequence(value)?.materialize();
    result.extend(wrap_sequence(other)?.materialize());
    Ok(Value::Seq(result))
}

/// Append `items` at the end.
pub fn push(value: &Value, items: &[Value]) -> Result<Value> {
    let mut result = wrap_sequence(value)?.materialize();
    result.extend(items.iter().cloned());
    Ok(Value::Seq(result))
}

/// Insert `items` at the beginning.
pub fn unshift(value: &Value, items: &[Value]) -> Result<Value> {
    let mut result = items.to_vec();
    result.extend(wrap_sequence(value)?.materialize());
    Ok(Value::Seq(result))
}

/// Transpose a sequence of sequences.
///
/// The i-th output row collects the i-th element of every input row,
/// padded with unit values to the length of the longest input.
pub fn zip(value: &Value) -> Result<Value> {
    let rows = wrap_sequence(value)?.materialize();
    let views = rows
        .iter()
        .map(wrap_sequence)
        .collect::<Result<Vec<_>>>()?;
    let height = views.iter().map(|v| v.len()).max().unwrap_or(0);
    let mut result = Vec::with_capacity(height);
    for i in 0..height {
        let mut row = Vec::with_capacity(views.len());
        for view in &views {
            row.push(if i < view.len() { view.at(i) } else { Value::Unit });
        }
        result.push(Value::Seq(row));
    }
    Ok(Value::Seq(result))
}
