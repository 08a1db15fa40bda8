//! Set algebra over sequences.
//!
//! All operations are binary and compare elements by dynamic equality.
//! The n-ary forms are expressed by chaining: `a.union(b).union(c)`,
//! and chained `xor` reproduces the recursive symmetric difference.

use crate::error::Result;
use crate::ops::{concat, filter, unique};
use crate::value::Value;
use crate::view::wrap_sequence;

/// Unique elements of both sequences, in first-appearance order.
pub fn union(value: &Value, other: &Value) -> Result<Value> {
    let joined = concat(value, other)?;
    unique(&joined)
}

/// Unique elements of `value` that also appear in `other`.
pub fn intersection(value: &Value, other: &Value) -> Result<Value> {
    let others = wrap_sequence(other)?.materialize();
    let deduped = unique(value)?;
    filter(&deduped, |element, _| others.contains(element))
}

/// Elements of `value` that do not appear in `other`.
///
/// Both inputs are validated up front, so the first failure encountered is
/// the one reported.
pub fn difference(value: &Value, other: &Value) -> Result<Value> {
    let others = wrap_sequence(other)?.materialize();
    filter(value, |element, _| !others.contains(element))
}

/// Elements of `value` excluding the listed values.
pub fn without(value: &Value, values: &Value) -> Result<Value> {
    difference(value, values)
}

/// Symmetric difference: unique elements present in exactly one of the two
/// sequences.
pub fn xor(value: &Value, other: &Value) -> Result<Value> {
    let all = union(value, other)?;
    let both = intersection(value, other)?;
    difference(&all, &both)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_union_dedups_in_order() {
        let merged = union(&Value::from(vec![1, 2]), &Value::from(vec![2, 3])).unwrap();
        assert_eq!(merged, Value::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_intersection_chains() {
        let common = intersection(&Value::from(vec![1, 2, 4]), &Value::from(vec![3, 2, 1])).unwrap();
        assert_eq!(common, Value::from(vec![1, 2]));
        let common = intersection(&common, &Value::from(vec![2, 5, 6])).unwrap();
        assert_eq!(common, Value::from(vec![2]));
    }

    #[test]
    fn test_difference_keeps_left_order() {
        let rest = difference(&Value::from(vec![1, 2, 3, 4]), &Value::from(vec![1, 3])).unwrap();
        assert_eq!(rest, Value::from(vec![2, 4]));
    }

    #[test]
    fn test_difference_reports_first_failure() {
        let err = difference(&Value::from(vec![1]), &Value::Int(9)).unwrap_err();
        assert_eq!(err, Error::NotIterable(Value::Int(9)));
    }

    #[test]
    fn test_xor_is_symmetric_difference() {
        let result = xor(&Value::from(vec![1, 2]), &Value::from(vec![2, 3])).unwrap();
        assert_eq!(result, Value::from(vec![1, 3]));
    }
}
