use thiserror::Error;

use crate::model::{DeclaredType, Value, ValueType};

/// Behaviour for an element type that a single Cli value coerces into.
///
/// Implemented for `bool`, `String`, `char`, the primitive integers and floats.
/// Enumerated types get an implementation via `#[derive(Symbolic)]`.
pub trait Scalar: Sized {
    /// The element type declared to the specification.
    fn value_type() -> ValueType;

    /// Extract the element from a coerced value.
    fn from_scalar(value: Value) -> Result<Self, ValueMismatch>;
}

/// Behaviour for a type that an accessor may declare: `T`, `Vec<T>`, `Option<T>` or `Option<Vec<T>>` for any [`Scalar`] `T`.
///
/// We use this at the bottom of the contract so the compiler can maintain each accessor's type, while the engine works across all types via [`DeclaredType`] and [`Value`].
pub trait Bindable: Sized {
    /// The full type declared to the specification.
    fn declared_type() -> DeclaredType;

    /// Extract the typed value from a coerced value.
    fn from_value(value: Value) -> Result<Self, ValueMismatch>;
}

/// A coerced value that does not fit the requested rust type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot extract {type_name} from {found}.")]
pub struct ValueMismatch {
    found: &'static str,
    type_name: &'static str,
}

impl ValueMismatch {
    #[doc(hidden)]
    pub fn new<T>(value: &Value) -> Self {
        Self {
            found: value.describe(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Failure to build the live object from a bound value set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The identity has no bound value (it is not part of the specification, or was already taken).
    #[error("'{0}' is not bound.")]
    Unbound(String),

    /// The bound value does not fit the requested rust type.
    #[error("'{identity}' {source}")]
    Mismatch {
        /// The accessor identity.
        identity: String,
        /// The underlying mismatch.
        source: ValueMismatch,
    },
}
