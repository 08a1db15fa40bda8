//! # Sequent
//!
//! A dynamic sequence pipeline engine with typed result coercion.
//!
//! Sequent normalizes values of unknown container kind (sequences,
//! strings, keyed mappings, or custom containers) into a uniform
//! indexable view, runs them through a chainable queue of deferred
//! transforms, and coerces the final dynamic result back into a
//! caller-supplied statically-typed output slot.
//!
//! ## Features
//!
//! - **Uniform iteration**: one view over sequences, code-point strings,
//!   mappings, and user containers implementing [`view::Sequence`]
//! - **Deferred execution**: stages queue at registration and run only at
//!   the terminal operation, first failure wins
//! - **Typed coercion**: direct assignment, then element-wise or key-wise
//!   reshape into the declared output type, with a predictable failure
//!   taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use sequent::prelude::*;
//!
//! # fn main() -> sequent::Result<()> {
//! let mut out: Vec<i64> = Vec::new();
//! Pipeline::begin([1, 2, 3, 4])
//!     .map(|v, _| Value::Int(v.as_int().unwrap() * 2))
//!     .filter(|v, _| v.as_int().unwrap() > 2)
//!     .out(&mut out)?;
//! assert_eq!(out, vec![4, 6, 8]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod ops;
pub mod pipeline;
pub mod value;
pub mod view;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::convert::FromValue;
    pub use crate::error::{Error, Result};
    pub use crate::pipeline::Pipeline;
    pub use crate::value::{Value, ValueMap};
    pub use crate::view::{is_sequence_like, wrap_sequence, SeqView, Sequence};
}

pub use error::{Error, Result};
