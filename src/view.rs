//! Uniform sequence views.
//!
//! This module normalizes a runtime-typed [`Value`] into a read-only
//! indexable abstraction:
//!
//! - [`Sequence`]: the capability trait a custom container implements to
//!   participate in pipelines without copying
//! - [`SeqView`]: the uniform view over sequences, strings, mappings, and
//!   custom containers
//! - [`is_sequence_like`] / [`wrap_sequence`]: free probes for callers that
//!   want to pre-validate inputs before building a pipeline
//!
//! # Example
//!
//! ```rust
//! use sequent::value::Value;
//! use sequent::view::{is_sequence_like, wrap_sequence};
//!
//! let text = Value::from("héllo");
//! assert!(is_sequence_like(&text));
//!
//! let view = wrap_sequence(&text).unwrap();
//! assert_eq!(view.len(), 5);
//! assert_eq!(view.at(1), Value::Char('é'));
//! ```

use crate::error::{Error, Result};
use crate::value::{Value, ValueMap};

// ============================================================================
// Sequence capability
// ============================================================================

/// The sequence capability: a fixed-length, position-indexable container.
///
/// Implement this for a custom container and wrap it with
/// [`Value::custom`] to run it through pipelines without copying. The view
/// layer checks this capability before any built-in container recognition,
/// so an implementor always iterates through its own `length`/`at`.
pub trait Sequence {
    /// Number of elements. Fixed for the lifetime of the container's use
    /// inside a view.
    fn length(&self) -> usize;

    /// Element at `index` in iteration order.
    ///
    /// Callers pre-bound `index` by [`length`](Sequence::length); behavior
    /// for out-of-range indices is the implementor's.
    fn at(&self, index: usize) -> Value;

    /// Fresh ordered snapshot of all elements, decoupled from the source.
    fn materialize(&self) -> Vec<Value> {
        (0..self.length()).map(|i| self.at(i)).collect()
    }
}

// ============================================================================
// SeqView
// ============================================================================

/// A uniform read-only indexable view over one [`Value`].
///
/// Construction is a point-in-time snapshot: the borrow keeps the backing
/// value immutable for the view's lifetime, and a string is decomposed
/// eagerly into code points (code points are not uniformly sized, so
/// index-by-position requires it). Sequences and mappings are viewed in
/// place without copying.
///
/// Views are cheap and short-lived; each operation constructs one against
/// the current value it is handed and drops it on return.
pub enum SeqView<'a> {
    /// Borrowed elements of a `Seq`.
    Items(&'a [Value]),
    /// Eagerly decomposed code points of a `Str`.
    Chars(Vec<Value>),
    /// Entries of a `Map`; indexing yields the value at that position in
    /// entry order.
    Entries(&'a ValueMap),
    /// A container carrying its own capability.
    Custom(&'a dyn Sequence),
}

impl std::fmt::Debug for SeqView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Items(items) => f.debug_tuple("Items").field(items).finish(),
            Self::Chars(chars) => f.debug_tuple("Chars").field(chars).finish(),
            Self::Entries(map) => f.debug_tuple("Entries").field(map).finish(),
            Self::Custom(seq) => f
                .debug_struct("Custom")
                .field("length", &seq.length())
                .finish(),
        }
    }
}

impl SeqView<'_> {
    /// Number of elements, characters, or entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Chars(chars) => chars.len(),
            Self::Entries(map) => map.len(),
            Self::Custom(seq) => seq.length(),
        }
    }

    /// Check if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` in iteration order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Out-of-range access is a programming
    /// error, not a recoverable failure: every operation pre-bounds its
    /// indices by [`len`](SeqView::len).
    pub fn at(&self, index: usize) -> Value {
        match self {
            Self::Items(items) => items[index].clone(),
            Self::Chars(chars) => chars[index].clone(),
            Self::Entries(map) => {
                let (_, value) = map.get_index(index).expect("index out of bounds");
                value.clone()
            }
            Self::Custom(seq) => seq.at(index),
        }
    }

    /// Fresh ordered snapshot of all elements, decoupled from the source.
    pub fn materialize(&self) -> Vec<Value> {
        match self {
            Self::Items(items) => items.to_vec(),
            Self::Chars(chars) => chars.clone(),
            Self::Entries(map) => map.values().cloned().collect(),
            Self::Custom(seq) => seq.materialize(),
        }
    }

    /// Iterate over elements in order.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).map(move |i| self.at(i))
    }
}

// ============================================================================
// Probes
// ============================================================================

/// Check whether a value has the sequence capability.
///
/// True for sequences, strings, mappings, and custom [`Sequence`]
/// containers; false for every scalar kind.
pub fn is_sequence_like(value: &Value) -> bool {
    matches!(
        value,
        Value::Custom(_) | Value::Seq(_) | Value::Str(_) | Value::Map(_)
    )
}

/// Normalize a value into a [`SeqView`].
///
/// The custom capability is honored first, then the built-in container
/// kinds. Fails with [`Error::NotIterable`] for scalar kinds.
pub fn wrap_sequence(value: &Value) -> Result<SeqView<'_>> {
    match value {
        Value::Custom(seq) => Ok(SeqView::Custom(seq.as_ref())),
        Value::Seq(items) => Ok(SeqView::Items(items)),
        Value::Str(text) => Ok(SeqView::Chars(text.chars().map(Value::Char).collect())),
        Value::Map(map) => Ok(SeqView::Entries(map)),
        other => Err(Error::NotIterable(other.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        from: i64,
    }

    impl Sequence for Countdown {
        fn length(&self) -> usize {
            self.from as usize
        }

        fn at(&self, index: usize) -> Value {
            Value::Int(self.from - index as i64)
        }
    }

    #[test]
    fn test_wrap_seq_borrows() {
        let value = Value::from(vec![1, 2, 3]);
        let view = wrap_sequence(&value).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.at(2), Value::Int(3));
    }

    #[test]
    fn test_wrap_string_by_code_point() {
        let value = Value::from("héllo");
        let view = wrap_sequence(&value).unwrap();
        assert_eq!(view.len(), 5);
        assert_eq!(view.at(0), Value::Char('h'));
        assert_eq!(view.at(1), Value::Char('é'));
        assert_eq!(view.at(4), Value::Char('o'));
    }

    #[test]
    fn test_wrap_map_yields_values() {
        let map: ValueMap = [("a".into(), 1.into()), ("b".into(), 2.into())]
            .into_iter()
            .collect();
        let value = Value::Map(map);
        let view = wrap_sequence(&value).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.materialize(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_custom_capability_checked_first() {
        let value = Value::custom(Countdown { from: 3 });
        assert!(is_sequence_like(&value));
        let view = wrap_sequence(&value).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(
            view.materialize(),
            vec![Value::Int(3), Value::Int(2), Value::Int(1)]
        );
    }

    #[test]
    fn test_scalars_are_not_iterable() {
        for value in [Value::Unit, Value::Bool(true), Value::Int(1), Value::Char('x')] {
            assert!(!is_sequence_like(&value));
            assert_eq!(
                wrap_sequence(&value).unwrap_err(),
                Error::NotIterable(value.clone())
            );
        }
    }

    #[test]
    fn test_materialize_is_a_snapshot() {
        let value = Value::from(vec![1, 2]);
        let snapshot = wrap_sequence(&value).unwrap().materialize();
        drop(value);
        assert_eq!(snapshot, vec![Value::Int(1), Value::Int(2)]);
    }
}
