use crate::api::capture::*;
use crate::model::{DeclaredType, NumericType, Value, ValueType};

impl<T: Scalar> Bindable for T {
    fn declared_type() -> DeclaredType {
        DeclaredType::scalar(T::value_type())
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        T::from_scalar(value)
    }
}

impl<T: Scalar> Bindable for Vec<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::scalar(T::value_type()).sequence()
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::List(values) => values.into_iter().map(T::from_scalar).collect(),
            Value::Absent => Ok(Vec::default()),
            other => Err(ValueMismatch::new::<Self>(&other)),
        }
    }
}

impl<T: Scalar> Bindable for Option<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::scalar(T::value_type()).optional()
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Absent => Ok(None),
            other => T::from_scalar(other).map(Some),
        }
    }
}

impl<T: Scalar> Bindable for Option<Vec<T>> {
    fn declared_type() -> DeclaredType {
        DeclaredType::scalar(T::value_type()).sequence().optional()
    }

    fn from_value(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Absent => Ok(None),
            other => Vec::<T>::from_value(other).map(Some),
        }
    }
}

impl Scalar for bool {
    fn value_type() -> ValueType {
        ValueType::Boolean
    }

    fn from_scalar(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Boolean(value) => Ok(value),
            other => Err(ValueMismatch::new::<Self>(&other)),
        }
    }
}

impl Scalar for String {
    fn value_type() -> ValueType {
        ValueType::Text
    }

    fn from_scalar(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Text(value) => Ok(value),
            other => Err(ValueMismatch::new::<Self>(&other)),
        }
    }
}

impl Scalar for char {
    fn value_type() -> ValueType {
        ValueType::Character
    }

    fn from_scalar(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Character(value) => Ok(value),
            other => Err(ValueMismatch::new::<Self>(&other)),
        }
    }
}

macro_rules! numeric_scalar {
    ($variant:ident => $($t:ty : $numeric:ident),*) => {
        $(
            impl Scalar for $t {
                fn value_type() -> ValueType {
                    ValueType::Numeric(NumericType::$numeric)
                }

                fn from_scalar(value: Value) -> Result<Self, ValueMismatch> {
                    match value {
                        Value::$variant(inner) => {
                            <$t>::try_from(inner).map_err(|_| ValueMismatch::new::<$t>(&value))
                        }
                        other => Err(ValueMismatch::new::<$t>(&other)),
                    }
                }
            }
        )*
    };
}

numeric_scalar!(Signed => i8: I8, i16: I16, i32: I32, i64: I64, isize: Isize);
numeric_scalar!(Unsigned => u8: U8, u16: U16, u32: U32, u64: U64, usize: Usize);

impl Scalar for f32 {
    fn value_type() -> ValueType {
        ValueType::Numeric(NumericType::F32)
    }

    fn from_scalar(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            // Coercion parsed this value as an f32, so narrowing is exact.
            Value::Float(inner) => Ok(inner as f32),
            other => Err(ValueMismatch::new::<Self>(&other)),
        }
    }
}

impl Scalar for f64 {
    fn value_type() -> ValueType {
        ValueType::Numeric(NumericType::F64)
    }

    fn from_scalar(value: Value) -> Result<Self, ValueMismatch> {
        match value {
            Value::Float(inner) => Ok(inner),
            other => Err(ValueMismatch::new::<Self>(&other)),
        }
    }
}
