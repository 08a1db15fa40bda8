//! Error types for Sequent.

use crate::value::Value;
use thiserror::Error;

/// Result type alias using Sequent's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Sequent operations.
///
/// Errors are plain data and compare by class and payload, so callers can
/// assert on the specific failure (e.g. [`Error::CannotAppend`] vs
/// [`Error::CannotAssign`]) rather than on message text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Value has no sequence capability (not a sequence, string, map, or
    /// [`Sequence`](crate::view::Sequence) implementor).
    #[error("{0:?} is not a sequence")]
    NotIterable(Value),

    /// A numeric bound exceeds the available length.
    #[error("index {0} out of bounds")]
    IndexOutOfBounds(usize),

    /// A pipeline stage failed; wraps the cause with the 1-based stage
    /// position. Later stages never ran.
    #[error("step {step} failed: {cause}")]
    Step {
        /// 1-based position of the failing stage.
        step: usize,
        /// The stage's own failure.
        cause: Box<Error>,
    },

    /// An element could not be converted to the output sequence's element
    /// type during reshape.
    #[error("cannot append {element:?} to a sequence of {target}")]
    CannotAppend {
        /// Name of the declared element type.
        target: &'static str,
        /// The offending element.
        element: Value,
    },

    /// No coercion path exists from the pipeline result to the output slot.
    #[error("cannot assign pipeline result {from:?} to {to}")]
    CannotAssign {
        /// The final pipeline value.
        from: Value,
        /// Name of the declared output type.
        to: &'static str,
    },
}
