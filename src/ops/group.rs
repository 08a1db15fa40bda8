//! Grouping and map construction.
//!
//! Both operations produce a [`ValueMap`]. Entry order is incidental
//! (insertion order of first appearance); callers and tests must compare
//! results by content, which is what map equality does.

use crate::error::Result;
use crate::value::{Value, ValueMap};
use crate::view::wrap_sequence;

/// Group elements by the key the callback derives for each.
///
/// The result maps each distinct key to the sequence of elements that
/// produced it, in source order within each group.
pub fn group_by<F>(value: &Value, mut key_fn: F) -> Result<Value>
where
    F: FnMut(&Value, usize) -> Value,
{
    let view = wrap_sequence(value)?;
    let mut groups = ValueMap::new();
    for i in 0..view.len() {
        let element = view.at(i);
        let key = key_fn(&element, i);
        if let Some(Value::Seq(members)) = groups.get_mut(&key) {
            members.push(element);
        } else {
            groups.insert(key, Value::Seq(vec![element]));
        }
    }
    Ok(Value::Map(groups))
}

/// Rebuild a mapping through an entry callback.
///
/// A mapping source feeds its own entries to the callback; any other
/// sequence source feeds `(position, element)` pairs. The callback returns
/// the `(key, value)` entry to store; a repeated key replaces the earlier
/// entry.
pub fn to_map<F>(value: &Value, mut entry_fn: F) -> Result<Value>
where
    F: FnMut(&Value, &Value) -> (Value, Value),
{
    let mut result = ValueMap::new();
    match value {
        Value::Map(map) => {
            for (key, entry) in map.iter() {
                let (new_key, new_value) = entry_fn(key, entry);
                result.insert(new_key, new_value);
            }
        }
        other => {
            let view = wrap_sequence(other)?;
            for i in 0..view.len() {
                let (new_key, new_value) = entry_fn(&Value::Int(i as i64), &view.at(i));
                result.insert(new_key, new_value);
            }
        }
    }
    Ok(Value::Map(result))
}
