//! Integration tests for result coercion and the failure taxonomy.

use sequent::prelude::*;
use std::collections::HashMap;

/// A stage-free pipeline round-trips a typed sequence through the dynamic
/// layer.
#[test]
fn test_round_trip_without_stages() {
    let mut result: Vec<i64> = Vec::new();
    Pipeline::begin([1, 2, 3]).out(&mut result).unwrap();
    assert_eq!(result, vec![1, 2, 3]);

    let mut text = String::new();
    Pipeline::begin("foo").out(&mut text).unwrap();
    assert_eq!(text, "foo");
}

/// A dynamic output slot always takes the result directly.
#[test]
fn test_dynamic_slot_direct_assignment() {
    let mut result = Value::Unit;
    Pipeline::begin([1, 2]).reverse().out(&mut result).unwrap();
    assert_eq!(result, Value::from(vec![2, 1]));
}

/// Finalizing into an incompatible element type reports the offending
/// element.
#[test]
fn test_incompatible_element_type() {
    let mut result: Vec<String> = Vec::new();
    let err = Pipeline::begin([1, 2, 3]).out(&mut result).unwrap_err();
    assert_eq!(
        err,
        Error::CannotAppend {
            target: std::any::type_name::<String>(),
            element: Value::Int(1),
        }
    );
    assert!(result.is_empty(), "slot must stay untouched");
}

/// A result with no coercion path at all reports CannotAssign.
#[test]
fn test_no_coercion_path() {
    let mut count: i64 = 0;
    let err = Pipeline::begin([1, 2, 3]).out(&mut count).unwrap_err();
    assert!(matches!(err, Error::CannotAssign { .. }));
    assert_eq!(count, 0);
}

/// A failing stage aborts execution and leaves the slot at its prior
/// value.
#[test]
fn test_stage_failure_leaves_slot() {
    let mut result: Vec<i64> = Vec::new();
    let err = Pipeline::begin([1, 2]).head(6).out(&mut result).unwrap_err();
    assert_eq!(
        err,
        Error::Step {
            step: 1,
            cause: Box::new(Error::IndexOutOfBounds(6)),
        }
    );
    assert!(result.is_empty());
}

/// A grouped result reshapes key-wise and element-wise into a concrete
/// map of typed sequences.
#[test]
fn test_mapping_reshape_from_group_by() {
    let mut groups: HashMap<String, Vec<String>> = HashMap::new();
    Pipeline::begin(["ant", "bee", "asp", "bat"])
        .group_by(|el, _| {
            let initial = el.as_str().unwrap().chars().next().unwrap();
            Value::Str(initial.to_string())
        })
        .out(&mut groups)
        .unwrap();
    assert_eq!(groups["a"], vec!["ant", "asp"]);
    assert_eq!(groups["b"], vec!["bee", "bat"]);
}

/// Mapping reshape propagates an element conversion failure.
#[test]
fn test_mapping_reshape_element_failure() {
    let mut groups: HashMap<String, Vec<i64>> = HashMap::new();
    let err = Pipeline::begin(["ant", "bee"])
        .group_by(|el, _| {
            let initial = el.as_str().unwrap().chars().next().unwrap();
            Value::Str(initial.to_string())
        })
        .out(&mut groups)
        .unwrap_err();
    assert!(matches!(err, Error::CannotAppend { .. }));
}

/// Map results compare by content, not entry order.
#[test]
fn test_map_results_compare_by_content() {
    let forward: ValueMap = Pipeline::begin([1, 2, 3, 4])
        .group_by(|el, _| Value::Int(el.as_int().unwrap() % 2))
        .must_out();
    let backward: ValueMap = Pipeline::begin([4, 3, 2, 1])
        .reverse()
        .group_by(|el, _| Value::Int(el.as_int().unwrap() % 2))
        .must_out();
    assert_eq!(forward, backward);
}

/// A custom sequence result reshapes element-wise like a built-in one.
#[test]
fn test_custom_sequence_reshape() {
    struct Pair;

    impl Sequence for Pair {
        fn length(&self) -> usize {
            2
        }

        fn at(&self, index: usize) -> Value {
            Value::Int(index as i64 + 1)
        }
    }

    let mut result: Vec<i64> = Vec::new();
    Pipeline::begin(Value::custom(Pair)).out(&mut result).unwrap();
    assert_eq!(result, vec![1, 2]);
}

/// The probe functions reuse the pipeline's own normalization.
#[test]
fn test_probes() {
    assert!(is_sequence_like(&Value::from("abc")));
    assert!(!is_sequence_like(&Value::Int(3)));

    let value = Value::from(vec![10, 20]);
    let view = wrap_sequence(&value).unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(view.at(1), Value::Int(20));
    assert!(wrap_sequence(&Value::Bool(true)).is_err());
}
