//! The pipeline engine.
//!
//! A [`Pipeline`] wraps an initial value and a queue of deferred stages.
//! Registration methods only append to the queue; nothing executes until a
//! terminal operation runs the stages in order against a single current
//! value and coerces the result into the caller's output slot.
//!
//! # Example
//!
//! ```rust
//! use sequent::pipeline::Pipeline;
//! use sequent::value::Value;
//!
//! # fn main() -> sequent::Result<()> {
//! let mut total: i64 = 0;
//! Pipeline::begin([1, 2, 3])
//!     .map(|v, _| Value::Int(v.as_int().unwrap() * 2))
//!     .fold(0, |acc, v, _| {
//!         Value::Int(acc.as_int().unwrap() + v.as_int().unwrap())
//!     })
//!     .out(&mut total)?;
//! assert_eq!(total, 12);
//! # Ok(())
//! # }
//! ```

use crate::convert::FromValue;
use crate::error::{Error, Result};
use crate::ops;
use crate::value::Value;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// One queued transform over the current value.
type Stage = Box<dyn FnOnce(Value) -> Result<Value>>;

/// A deferred sequence-manipulation pipeline.
///
/// Construction is free of type checks: every built-in stage re-validates
/// the shape of the value it is handed when it executes, so a stage may
/// rely on an earlier stage having changed the value's kind entirely.
///
/// The engine is one-shot: both terminals consume it, so a finished
/// pipeline cannot be re-run.
pub struct Pipeline {
    current: Value,
    stages: SmallVec<[Stage; 8]>,
}

impl Pipeline {
    /// Start a pipeline around an initial value.
    pub fn begin(value: impl Into<Value>) -> Self {
        Self {
            current: value.into(),
            stages: SmallVec::new(),
        }
    }

    fn stage<F>(mut self, f: F) -> Self
    where
        F: FnOnce(Value) -> Result<Value> + 'static,
    {
        self.stages.push(Box::new(f));
        self
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    /// Send each element through `f`; see [`ops::map`].
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(&Value, usize) -> Value + 'static,
    {
        self.stage(move |current| ops::map(&current, f))
    }

    /// Keep elements matching the predicate; see [`ops::filter`].
    pub fn filter<F>(self, pred: F) -> Self
    where
        F: FnMut(&Value, usize) -> bool + 'static,
    {
        self.stage(move |current| ops::filter(&current, pred))
    }

    /// Fold left-to-right from a seed; see [`ops::fold`].
    pub fn fold<F>(self, seed: impl Into<Value>, f: F) -> Self
    where
        F: FnMut(Value, &Value, usize) -> Value + 'static,
    {
        let seed = seed.into();
        self.stage(move |current| ops::fold(&current, seed, f))
    }

    /// Fold left-to-right seeding from the first element; see
    /// [`ops::reduce`].
    pub fn reduce<F>(self, f: F) -> Self
    where
        F: FnMut(Value, &Value, usize) -> Value + 'static,
    {
        self.stage(move |current| ops::reduce(&current, f))
    }

    /// Fold right-to-left from a seed; see [`ops::fold_right`].
    pub fn fold_right<F>(self, seed: impl Into<Value>, f: F) -> Self
    where
        F: FnMut(Value, &Value, usize) -> Value + 'static,
    {
        let seed = seed.into();
        self.stage(move |current| ops::fold_right(&current, seed, f))
    }

    /// Fold right-to-left seeding from the last element; see
    /// [`ops::reduce_right`].
    pub fn reduce_right<F>(self, f: F) -> Self
    where
        F: FnMut(Value, &Value, usize) -> Value + 'static,
    {
        self.stage(move |current| ops::reduce_right(&current, f))
    }

    /// Sort with a comparator; see [`ops::sort_by`].
    pub fn sort_by<F>(self, compare: F) -> Self
    where
        F: FnMut(&Value, &Value) -> Ordering + 'static,
    {
        self.stage(move |current| ops::sort_by(&current, compare))
    }

    /// Flatten nested sequences one level; see [`ops::flatten`].
    pub fn flatten(self) -> Self {
        self.stage(|current| ops::flatten(&current))
    }

    /// Drop unit values; see [`ops::compact`].
    pub fn compact(self) -> Self {
        self.stage(|current| ops::compact(&current))
    }

    /// Drop duplicates; see [`ops::unique`].
    pub fn unique(self) -> Self {
        self.stage(|current| ops::unique(&current))
    }

    /// Reverse element order; see [`ops::reverse`].
    pub fn reverse(self) -> Self {
        self.stage(|current| ops::reverse(&current))
    }

    // ------------------------------------------------------------------
    // Selection and structure
    // ------------------------------------------------------------------

    /// Replace the current value with its first element; see
    /// [`ops::first`].
    pub fn first(self) -> Self {
        self.stage(|current| ops::first(&current))
    }

    /// Replace the current value with its last element; see [`ops::last`].
    pub fn last(self) -> Self {
        self.stage(|current| ops::last(&current))
    }

    /// Keep the leading elements through `end`, inclusive; see
    /// [`ops::head`].
    pub fn head(self, end: usize) -> Self {
        self.stage(move |current| ops::head(&current, end))
    }

    /// Keep the trailing elements from `start`; see [`ops::tail`].
    pub fn tail(self, start: usize) -> Self {
        self.stage(move |current| ops::tail(&current, start))
    }

    /// Keep elements from `start` through `end`, inclusive; see
    /// [`ops::slice`].
    pub fn slice(self, start: usize, end: usize) -> Self {
        self.stage(move |current| ops::slice(&current, start, end))
    }

    /// Delete `delete_count` elements at `start`, inserting `items`; see
    /// [`ops::splice`].
    pub fn splice<I>(self, start: usize, delete_count: usize, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        self.stage(move |current| ops::splice(&current, start, delete_count, &items))
    }

    /// Split into groups of `size`; see [`ops::chunk`].
    pub fn chunk(self, size: usize) -> Self {
        self.stage(move |current| ops::chunk(&current, size))
    }

    /// Append the elements of another sequence; see [`ops::concat`].
    pub fn concat(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.stage(move |current| ops::concat(&current, &other))
    }

    /// Append values at the end; see [`ops::push`].
    pub fn push<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        self.stage(move |current| ops::push(&current, &items))
    }

    /// Insert values at the beginning; see [`ops::unshift`].
    pub fn unshift<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        self.stage(move |current| ops::unshift(&current, &items))
    }

    /// Transpose a sequence of sequences; see [`ops::zip`].
    pub fn zip(self) -> Self {
        self.stage(|current| ops::zip(&current))
    }

    // ------------------------------------------------------------------
    // Searches and predicates
    // ------------------------------------------------------------------

    /// Replace the current value with the position of `needle` at or after
    /// `from`, or `-1`; see [`ops::index_of`].
    pub fn index_of(self, needle: impl Into<Value>, from: usize) -> Self {
        let needle = needle.into();
        self.stage(move |current| ops::index_of(&current, &needle, from).map(Value::Int))
    }

    /// Replace the current value with the last position of `needle`, or
    /// `-1`; see [`ops::last_index_of`].
    pub fn last_index_of(self, needle: impl Into<Value>) -> Self {
        let needle = needle.into();
        self.stage(move |current| ops::last_index_of(&current, &needle).map(Value::Int))
    }

    /// Replace the current value with whether any element matches; see
    /// [`ops::some`].
    pub fn some<F>(self, pred: F) -> Self
    where
        F: FnMut(&Value, usize) -> bool + 'static,
    {
        self.stage(move |current| ops::some(&current, pred).map(Value::Bool))
    }

    /// Replace the current value with whether every element matches; see
    /// [`ops::every`].
    pub fn every<F>(self, pred: F) -> Self
    where
        F: FnMut(&Value, usize) -> bool + 'static,
    {
        self.stage(move |current| ops::every(&current, pred).map(Value::Bool))
    }

    /// Replace the current value with whether it equals another sequence
    /// element-wise; see [`ops::equals`].
    pub fn equals(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.stage(move |current| ops::equals(&current, &other).map(Value::Bool))
    }

    // ------------------------------------------------------------------
    // Set algebra
    // ------------------------------------------------------------------

    /// Union with another sequence; see [`ops::union`].
    pub fn union(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.stage(move |current| ops::union(&current, &other))
    }

    /// Intersection with another sequence; see [`ops::intersection`].
    pub fn intersection(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.stage(move |current| ops::intersection(&current, &other))
    }

    /// Difference against another sequence; see [`ops::difference`].
    pub fn difference(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.stage(move |current| ops::difference(&current, &other))
    }

    /// Exclude the listed values; see [`ops::without`].
    pub fn without<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = Value::seq(values);
        self.stage(move |current| ops::without(&current, &values))
    }

    /// Symmetric difference with another sequence; see [`ops::xor`].
    pub fn xor(self, other: impl Into<Value>) -> Self {
        let other = other.into();
        self.stage(move |current| ops::xor(&current, &other))
    }

    // ------------------------------------------------------------------
    // Grouping
    // ------------------------------------------------------------------

    /// Group elements by a derived key; see [`ops::group_by`].
    pub fn group_by<F>(self, key_fn: F) -> Self
    where
        F: FnMut(&Value, usize) -> Value + 'static,
    {
        self.stage(move |current| ops::group_by(&current, key_fn))
    }

    /// Rebuild a mapping through an entry callback; see [`ops::to_map`].
    pub fn to_map<F>(self, entry_fn: F) -> Self
    where
        F: FnMut(&Value, &Value) -> (Value, Value) + 'static,
    {
        self.stage(move |current| ops::to_map(&current, entry_fn))
    }

    // ------------------------------------------------------------------
    // Escape hatch
    // ------------------------------------------------------------------

    /// Insert an arbitrary transform over the current value.
    ///
    /// For operations outside the built-in catalogue. The callback receives
    /// the current value and returns the new one, or a failure that halts
    /// the pipeline like any built-in stage.
    pub fn op<F>(self, f: F) -> Self
    where
        F: FnOnce(Value) -> Result<Value> + 'static,
    {
        self.stage(f)
    }

    // ------------------------------------------------------------------
    // Terminals
    // ------------------------------------------------------------------

    /// Run all stages, then coerce the final value into `slot`.
    ///
    /// Stages execute in registration order against a single current
    /// value. The first failing stage aborts execution with
    /// [`Error::Step`] carrying its 1-based position; later stages never
    /// run and `slot` is left untouched. After a clean run the coercion
    /// resolver in [`convert`](crate::convert) assigns the result, trying
    /// direct assignment before any element-wise reshape.
    pub fn out<T: FromValue>(self, slot: &mut T) -> Result<()> {
        let value = self.run()?;
        tracing::trace!(to = T::type_name(), kind = value.kind(), "coercing result");
        *slot = T::from_value(&value)?;
        Ok(())
    }

    /// Run all stages and return the coerced result directly.
    ///
    /// # Panics
    ///
    /// Panics on any stage or coercion failure. Use [`out`](Pipeline::out)
    /// to handle failures as data.
    pub fn must_out<T: FromValue>(self) -> T {
        match self.run().and_then(|value| T::from_value(&value)) {
            Ok(result) => result,
            Err(err) => panic!("pipeline failed: {err}"),
        }
    }

    fn run(self) -> Result<Value> {
        let Self { mut current, stages } = self;
        tracing::debug!(stages = stages.len(), "executing pipeline");
        for (i, stage) in stages.into_iter().enumerate() {
            current = stage(current).map_err(|cause| Error::Step {
                step: i + 1,
                cause: Box::new(cause),
            })?;
            tracing::trace!(step = i + 1, kind = current.kind(), "stage complete");
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_registration_executes_nothing() {
        let ran = Rc::new(Cell::new(false));
        let witness = ran.clone();
        let pipeline = Pipeline::begin([1, 2, 3]).op(move |value| {
            witness.set(true);
            Ok(value)
        });
        drop(pipeline);
        assert!(!ran.get());
    }

    #[test]
    fn test_first_failure_stops_execution() {
        let ran = Rc::new(Cell::new(false));
        let witness = ran.clone();
        let mut slot = Value::Unit;
        let err = Pipeline::begin(1)
            .map(|v, _| v.clone())
            .op(move |value| {
                witness.set(true);
                Ok(value)
            })
            .out(&mut slot)
            .unwrap_err();
        assert_eq!(
            err,
            Error::Step {
                step: 1,
                cause: Box::new(Error::NotIterable(Value::Int(1))),
            }
        );
        assert!(!ran.get(), "stage after the failure must not run");
        assert_eq!(slot, Value::Unit, "output slot must stay untouched");
    }

    #[test]
    fn test_step_index_is_one_based() {
        let mut slot = Value::Unit;
        let err = Pipeline::begin([1, 2])
            .reverse()
            .head(6)
            .out(&mut slot)
            .unwrap_err();
        assert_eq!(
            err,
            Error::Step {
                step: 2,
                cause: Box::new(Error::IndexOutOfBounds(6)),
            }
        );
    }

    #[test]
    fn test_stage_can_change_value_kind() {
        let mut count: i64 = 0;
        Pipeline::begin(["a", "b", "c"])
            .op(|value| Ok(Value::Int(value.as_seq().unwrap().len() as i64)))
            .out(&mut count)
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_no_stages_round_trips() {
        let mut out: Vec<i64> = Vec::new();
        Pipeline::begin([1, 2, 3]).out(&mut out).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_must_out_returns_value() {
        let total: i64 = Pipeline::begin([1, 2, 3])
            .fold(0, |acc, v, _| {
                Value::Int(acc.as_int().unwrap() + v.as_int().unwrap())
            })
            .must_out();
        assert_eq!(total, 6);
    }

    #[test]
    #[should_panic(expected = "pipeline failed")]
    fn test_must_out_panics_on_failure() {
        let _: i64 = Pipeline::begin(1).reverse().must_out();
    }
}
