//! Result coercion from dynamic values to concrete Rust types.
//!
//! When a pipeline finishes, its current value is a [`Value`] while the
//! caller holds a statically-typed output slot. [`FromValue`] is the bridge:
//! a closed dispatch over the variant set that preserves the resolver's
//! fallback priority:
//!
//! 1. **Direct**: the value's variant already matches the target (`Value`
//!    itself, a matching scalar, [`ValueMap`]): zero-conversion assignment.
//! 2. **Mapping reshape**: a `Map` into `HashMap<String, V>` converts
//!    key-wise and value-wise; element failures inside sequence-valued
//!    entries surface as [`Error::CannotAppend`].
//! 3. **Sequence reshape**: a `Seq` (or custom sequence) into `Vec<T>`
//!    converts element-wise; an inconvertible element fails with
//!    [`Error::CannotAppend`].
//! 4. Anything else fails with [`Error::CannotAssign`].
//!
//! # Example
//!
//! ```rust
//! use sequent::convert::FromValue;
//! use sequent::value::Value;
//!
//! let value = Value::from(vec![1, 2, 3]);
//! let ints = Vec::<i64>::from_value(&value).unwrap();
//! assert_eq!(ints, vec![1, 2, 3]);
//!
//! assert!(Vec::<String>::from_value(&value).is_err());
//! ```

use crate::error::{Error, Result};
use crate::value::{Value, ValueMap};
use std::collections::HashMap;

/// Conversion from a dynamic [`Value`] into a concrete type.
///
/// Implementations exist for the scalar kinds, `String`, [`Value`] itself
/// (always succeeds), [`ValueMap`], element-wise `Vec<T>`, and key-wise
/// `HashMap<String, V>`. The compositions cover the common reshapes: a
/// `group_by` result coerces into `HashMap<String, Vec<String>>` through
/// the map impl driving the sequence impl per entry.
pub trait FromValue: Sized {
    /// Name of the target type, used in failure reports.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Attempt the conversion.
    fn from_value(value: &Value) -> Result<Self>;
}

/// The step-4 fallback: no coercion path to `T`.
fn mismatch<T: FromValue>(value: &Value) -> Error {
    Error::CannotAssign {
        from: value.clone(),
        to: T::type_name(),
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for char {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_char().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_int().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(i) => i32::try_from(*i).map_err(|_| mismatch::<Self>(value)),
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self> {
        value.as_float().ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch::<Self>(value))
    }
}

impl FromValue for ValueMap {
    fn from_value(value: &Value) -> Result<Self> {
        value
            .as_map()
            .cloned()
            .ok_or_else(|| mismatch::<Self>(value))
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Seq(items) => convert_elements(items),
            Value::Custom(seq) => convert_elements(&seq.materialize()),
            _ => Err(mismatch::<Self>(value)),
        }
    }
}

/// Element-wise sequence reshape: any element that fails to convert is
/// reported as `CannotAppend` against the declared element type.
fn convert_elements<T: FromValue>(items: &[Value]) -> Result<Vec<T>> {
    items
        .iter()
        .map(|element| {
            T::from_value(element).map_err(|_| Error::CannotAppend {
                target: T::type_name(),
                element: element.clone(),
            })
        })
        .collect()
}

impl<V: FromValue> FromValue for HashMap<String, V> {
    fn from_value(value: &Value) -> Result<Self> {
        let map = value.as_map().ok_or_else(|| mismatch::<Self>(value))?;
        let mut result = HashMap::with_capacity(map.len());
        for (key, entry) in map.iter() {
            let key = key
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| mismatch::<Self>(value))?;
            result.insert(key, V::from_value(entry)?);
        }
        Ok(result)
    }
}
