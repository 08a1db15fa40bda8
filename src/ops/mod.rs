//! The operation catalogue.
//!
//! Free functions implementing every built-in transform over a dynamic
//! [`Value`](crate::value::Value). Each operation normalizes its input
//! through [`wrap_sequence`](crate::view::wrap_sequence) at call time, not
//! at pipeline registration time, and fails with
//! [`Error::NotIterable`](crate::error::Error::NotIterable) if the value it
//! is handed has no sequence capability. This late check is what lets a
//! stage depend on an earlier stage changing the value's shape.
//!
//! The functions are usable on their own; the
//! [`Pipeline`](crate::pipeline::Pipeline) methods are thin deferred
//! wrappers around them.

mod group;
mod search;
mod select;
mod sets;
mod transform;

pub use group::{group_by, to_map};
pub use search::{equals, every, index_of, last_index_of, some};
pub use select::{chunk, concat, first, head, last, push, slice, splice, tail, unshift, zip};
pub use sets::{difference, intersection, union, without, xor};
pub use transform::{
    compact, filter, flatten, fold, fold_right, map, reduce, reduce_right, reverse, sort_by,
    unique,
};
