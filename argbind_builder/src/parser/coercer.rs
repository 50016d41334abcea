use thiserror::Error;

use crate::matcher::RawValue;
use crate::model::{Arity, NumericType, Value, ValueType};
use crate::parser::{Aggregator, ValidationFailure};
use crate::specification::{OptionSpecification, UnparsedSpecification};

/// A raw value that does not convert to its declared type.
/// Displays as the failure message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum CoerceError {
    #[error("Unsupported number format: {0}")]
    Number(String),

    #[error("'{0}' is not a single character.")]
    Character(String),

    #[error("'{token}' is not one of {{{symbols}}}.")]
    Symbol { token: String, symbols: String },

    #[error("cannot convert '{0}' to bool.")]
    Boolean(String),
}

macro_rules! parse_numeric {
    ($raw:expr, $t:ty, $variant:ident) => {
        $raw.parse::<$t>()
            .map(|value| Value::$variant(value as _))
            .map_err(|error| CoerceError::Number(error.to_string()))
    };
}

/// Convert one raw value into the (element) value type.
pub(crate) fn coerce_scalar(value_type: ValueType, raw: &str) -> Result<Value, CoerceError> {
    match value_type {
        ValueType::Boolean => match raw {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(CoerceError::Boolean(raw.to_string())),
        },
        ValueType::Text => Ok(Value::Text(raw.to_string())),
        ValueType::Character => {
            let mut characters = raw.chars();

            match (characters.next(), characters.next()) {
                (Some(character), None) => Ok(Value::Character(character)),
                _ => Err(CoerceError::Character(raw.to_string())),
            }
        }
        ValueType::Numeric(numeric) => match numeric {
            NumericType::I8 => parse_numeric!(raw, i8, Signed),
            NumericType::I16 => parse_numeric!(raw, i16, Signed),
            NumericType::I32 => parse_numeric!(raw, i32, Signed),
            NumericType::I64 => parse_numeric!(raw, i64, Signed),
            NumericType::Isize => parse_numeric!(raw, isize, Signed),
            NumericType::U8 => parse_numeric!(raw, u8, Unsigned),
            NumericType::U16 => parse_numeric!(raw, u16, Unsigned),
            NumericType::U32 => parse_numeric!(raw, u32, Unsigned),
            NumericType::U64 => parse_numeric!(raw, u64, Unsigned),
            NumericType::Usize => parse_numeric!(raw, usize, Unsigned),
            NumericType::F32 => parse_numeric!(raw, f32, Float),
            NumericType::F64 => parse_numeric!(raw, f64, Float),
        },
        ValueType::Symbol(symbols) => {
            if symbols.contains(&raw) {
                Ok(Value::Symbol(raw.to_string()))
            } else {
                Err(CoerceError::Symbol {
                    token: raw.to_string(),
                    symbols: symbols.join(", "),
                })
            }
        }
    }
}

/// Converts the raw captures into values of their declared types, applying defaults and value constraints.
///
/// Failures are pushed to the aggregator; a value which fails is dropped.
pub(crate) struct Coercer<'a> {
    aggregator: &'a mut Aggregator,
}

impl<'a> Coercer<'a> {
    pub(crate) fn new(aggregator: &'a mut Aggregator) -> Self {
        Self { aggregator }
    }

    pub(crate) fn coerce_option(
        &mut self,
        option: &OptionSpecification,
        raw: Option<&RawValue>,
    ) -> Value {
        match (option.arity(), raw) {
            (Arity::Flag, raw) => Value::Boolean(raw.is_some()),
            (Arity::Single, Some(RawValue::Single(value))) => {
                self.coerce_one(option, value).unwrap_or(Value::Absent)
            }
            (Arity::Multiple, Some(RawValue::Multiple(values))) => {
                self.check_count(option, values.len());

                if values.is_empty() {
                    return option
                        .defaults()
                        .cloned()
                        .unwrap_or(Value::List(Vec::default()));
                }

                Value::List(
                    values
                        .iter()
                        .filter_map(|value| self.coerce_one(option, value))
                        .collect(),
                )
            }
            (_, None) => option.defaults().cloned().unwrap_or(Value::Absent),
            (arity, Some(raw)) => {
                unreachable!("internal error - {arity} option captured {raw:?}")
            }
        }
    }

    pub(crate) fn coerce_unparsed(
        &mut self,
        unparsed: &UnparsedSpecification,
        values: &[String],
    ) -> Value {
        if values.is_empty() {
            return unparsed.defaults().cloned().unwrap_or(Value::Absent);
        }

        let element = unparsed.declared_type().element();
        let mut coerced = Vec::with_capacity(values.len());

        for value in values {
            match coerce_scalar(element, value) {
                Ok(value) => coerced.push(value),
                Err(error) => self
                    .aggregator
                    .push(ValidationFailure::invalid_value(unparsed.identity(), error)),
            }
        }

        Value::List(coerced)
    }

    fn coerce_one(&mut self, option: &OptionSpecification, value: &str) -> Option<Value> {
        if let Some(pattern) = &option.pattern {
            if !pattern.matches(value) {
                self.aggregator
                    .push(ValidationFailure::pattern_mismatch(option, value));
                return None;
            }
        }

        match coerce_scalar(option.declared_type().element(), value) {
            Ok(value) => Some(value),
            Err(error) => {
                self.aggregator
                    .push(ValidationFailure::invalid_value(option.identity(), error));
                None
            }
        }
    }

    fn check_count(&mut self, option: &OptionSpecification, found: usize) {
        let count = option.count;

        if let Some(exactly) = count.exactly {
            if found != exactly {
                self.aggregator.push(ValidationFailure::wrong_number_of_values(
                    option, found, exactly,
                ));
            }
        }

        if let Some(minimum) = count.minimum {
            if found < minimum {
                self.aggregator
                    .push(ValidationFailure::too_few_values(option, found, minimum));
            }
        }

        if let Some(maximum) = count.maximum {
            if found > maximum {
                self.aggregator
                    .push(ValidationFailure::too_many_values(option, found, maximum));
            }
        }
    }
}
