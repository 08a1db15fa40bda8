//! Element-wise transforms and folds.

use crate::error::{Error, Result};
use crate::value::Value;
use crate::view::{is_sequence_like, wrap_sequence};
use std::cmp::Ordering;

/// Send each element through `f` and collect the results.
///
/// Preserves length. The callback receives the element and its position.
pub fn map<F>(value: &Value, mut f: F) -> Result<Value>
where
    F: FnMut(&Value, usize) -> Value,
{
    let view = wrap_sequence(value)?;
    let mut result = Vec::with_capacity(view.len());
    for i in 0..view.len() {
        result.push(f(&view.at(i), i));
    }
    Ok(Value::Seq(result))
}

/// Keep the elements the predicate returns true for.
pub fn filter<F>(value: &Value, mut pred: F) -> Result<Value>
where
    F: FnMut(&Value, usize) -> bool,
{
    let view = wrap_sequence(value)?;
    let mut result = Vec::new();
    for i in 0..view.len() {
        let element = view.at(i);
        if pred(&element, i) {
            result.push(element);
        }
    }
    Ok(Value::Seq(result))
}

/// Fold the sequence left-to-right into a single value, starting from
/// `seed`.
pub fn fold<F>(value: &Value, seed: Value, mut f: F) -> Result<Value>
where
    F: FnMut(Value, &Value, usize) -> Value,
{
    let view = wrap_sequence(value)?;
    let mut acc = seed;
    for i in 0..view.len() {
        acc = f(acc, &view.at(i), i);
    }
    Ok(acc)
}

/// Fold left-to-right with the first element as the seed.
///
/// Fails with [`Error::IndexOutOfBounds`] on an empty sequence, which has
/// no first element to seed from.
pub fn reduce<F>(value: &Value, mut f: F) -> Result<Value>
where
    F: FnMut(Value, &Value, usize) -> Value,
{
    let view = wrap_sequence(value)?;
    if view.is_empty() {
        return Err(Error::IndexOutOfBounds(0));
    }
    let mut acc = view.at(0);
    for i in 1..view.len() {
        acc = f(acc, &view.at(i), i);
    }
    Ok(acc)
}

/// Fold right-to-left into a single value, starting from `seed`.
///
/// Equivalent to reversing and then folding left; the index passed to the
/// callback is the position in the reversed order.
pub fn fold_right<F>(value: &Value, seed: Value, f: F) -> Result<Value>
where
    F: FnMut(Value, &Value, usize) -> Value,
{
    let reversed = reverse(value)?;
    fold(&reversed, seed, f)
}

/// Fold right-to-left with the last element as the seed.
pub fn reduce_right<F>(value: &Value, f: F) -> Result<Value>
where
    F: FnMut(Value, &Value, usize) -> Value,
{
    let reversed = reverse(value)?;
    reduce(&reversed, f)
}

/// Reverse the order of the elements.
pub fn reverse(value: &Value) -> Result<Value> {
    let view = wrap_sequence(value)?;
    let mut result = view.materialize();
    result.reverse();
    Ok(Value::Seq(result))
}

/// Sort the elements with a comparator, preserving the order of equals.
pub fn sort_by<F>(value: &Value, mut compare: F) -> Result<Value>
where
    F: FnMut(&Value, &Value) -> Ordering,
{
    let view = wrap_sequence(value)?;
    let mut result = view.materialize();
    result.sort_by(|a, b| compare(a, b));
    Ok(Value::Seq(result))
}

/// Flatten nested sequences one level.
///
/// Strings are kept whole: `["ab", ["c"]]` flattens to `["ab", "c"]`, not
/// to characters. Scalar elements pass through unchanged.
pub fn flatten(value: &Value) -> Result<Value> {
    let view = wrap_sequence(value)?;
    let mut result = Vec::new();
    for i in 0..view.len() {
        let element = view.at(i);
        if !matches!(element, Value::Str(_)) && is_sequence_like(&element) {
            result.extend(wrap_sequence(&element)?.materialize());
        } else {
            result.push(element);
        }
    }
    Ok(Value::Seq(result))
}

/// Drop every unit value.
pub fn compact(value: &Value) -> Result<Value> {
    filter(value, |element, _| !element.is_unit())
}

/// Drop duplicate elements, keeping the first occurrence of each.
///
/// Idempotent: `unique(unique(s)) == unique(s)`.
pub fn unique(value: &Value) -> Result<Value> {
    let view = wrap_sequence(value)?;
    let mut result: Vec<Value> = Vec::new();
    for i in 0..view.len() {
        let element = view.at(i);
        if !result.contains(&element) {
            result.push(element);
        }
    }
    Ok(Value::Seq(result))
}
