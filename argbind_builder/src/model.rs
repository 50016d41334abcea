/// The number of values an option consumes per occurrence on the Cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// No value: the option is a boolean flag.
    Flag,
    /// Precisely one value.
    Single,
    /// One value per occurrence, collected across repeated occurrences.
    Multiple,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Flag => write!(f, "flag"),
            Arity::Single => write!(f, "single"),
            Arity::Multiple => write!(f, "multiple"),
        }
    }
}

/// The primitive numeric types an option value may coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NumericType {
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
}

impl NumericType {
    /// The rust type name, as used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            NumericType::I8 => "i8",
            NumericType::I16 => "i16",
            NumericType::I32 => "i32",
            NumericType::I64 => "i64",
            NumericType::Isize => "isize",
            NumericType::U8 => "u8",
            NumericType::U16 => "u16",
            NumericType::U32 => "u32",
            NumericType::U64 => "u64",
            NumericType::Usize => "usize",
            NumericType::F32 => "f32",
            NumericType::F64 => "f64",
        }
    }
}

/// The element type of a declared accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `true`/`false`.
    Boolean,
    /// Passthrough text.
    Text,
    /// Precisely one character.
    Character,
    /// A number of the given width.
    Numeric(NumericType),
    /// One of the declared symbols (case sensitive), in declaration order.
    Symbol(&'static [&'static str]),
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Boolean => write!(f, "bool"),
            ValueType::Text => write!(f, "String"),
            ValueType::Character => write!(f, "char"),
            ValueType::Numeric(numeric) => write!(f, "{}", numeric.type_name()),
            ValueType::Symbol(symbols) => write!(f, "{{{}}}", symbols.join(", ")),
        }
    }
}

/// The full type of a declared accessor: its element type, and whether it is wrapped as a sequence and/or optional.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{DeclaredType, ValueType};
///
/// // The equivalent of `Option<Vec<String>>`.
/// let declared = DeclaredType::scalar(ValueType::Text).sequence().optional();
/// assert!(declared.is_sequence());
/// assert!(declared.is_optional());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclaredType {
    element: ValueType,
    sequence: bool,
    optional: bool,
}

impl DeclaredType {
    /// Declare a plain (non-sequence, non-optional) type.
    pub fn scalar(element: ValueType) -> Self {
        Self {
            element,
            sequence: false,
            optional: false,
        }
    }

    /// Wrap this type as a sequence.
    pub fn sequence(mut self) -> Self {
        self.sequence = true;
        self
    }

    /// Wrap this type as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The element type.
    pub fn element(&self) -> ValueType {
        self.element
    }

    /// Whether this is a sequence type.
    pub fn is_sequence(&self) -> bool {
        self.sequence
    }

    /// Whether this is an optional type.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn arity(&self) -> Arity {
        if self.sequence {
            Arity::Multiple
        } else if self.element == ValueType::Boolean {
            Arity::Flag
        } else {
            Arity::Single
        }
    }
}

/// A coerced value, bound to an accessor identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value was supplied, and there is no default.
    Absent,
    /// A flag or boolean element.
    Boolean(bool),
    /// A text value.
    Text(String),
    /// A single character.
    Character(char),
    /// A signed integer (any of the signed widths).
    Signed(i64),
    /// An unsigned integer (any of the unsigned widths).
    Unsigned(u64),
    /// A floating point number (either width).
    Float(f64),
    /// A validated symbol of an enumerated type.
    Symbol(String),
    /// The elements of a sequence, in order.
    List(Vec<Value>),
}

impl Value {
    /// Whether this value is [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Value::Absent => "no value",
            Value::Boolean(_) => "a boolean",
            Value::Text(_) => "a text value",
            Value::Character(_) => "a character",
            Value::Signed(_) => "a signed integer",
            Value::Unsigned(_) => "an unsigned integer",
            Value::Float(_) => "a float",
            Value::Symbol(_) => "a symbol",
            Value::List(_) => "a list",
        }
    }
}

/// Displays the Cli form of the value.
/// Coercing this text under the same declared type yields the same value (lists excepted).
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Absent => Ok(()),
            Value::Boolean(value) => write!(f, "{value}"),
            Value::Text(value) | Value::Symbol(value) => write!(f, "{value}"),
            Value::Character(value) => write!(f, "{value}"),
            Value::Signed(value) => write!(f, "{value}"),
            Value::Unsigned(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::List(values) => {
                let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", inner.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DeclaredType::scalar(ValueType::Boolean), Arity::Flag)]
    #[case(DeclaredType::scalar(ValueType::Boolean).optional(), Arity::Flag)]
    #[case(DeclaredType::scalar(ValueType::Boolean).sequence(), Arity::Multiple)]
    #[case(DeclaredType::scalar(ValueType::Text), Arity::Single)]
    #[case(DeclaredType::scalar(ValueType::Character).optional(), Arity::Single)]
    #[case(DeclaredType::scalar(ValueType::Numeric(NumericType::U8)), Arity::Single)]
    #[case(DeclaredType::scalar(ValueType::Text).sequence(), Arity::Multiple)]
    #[case(DeclaredType::scalar(ValueType::Text).sequence().optional(), Arity::Multiple)]
    fn declared_arity(#[case] declared: DeclaredType, #[case] expected: Arity) {
        assert_eq!(declared.arity(), expected);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Absent.to_string(), "");
        assert_eq!(Value::Signed(-3).to_string(), "-3");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Character('x').to_string(), "x");
        assert_eq!(
            Value::List(vec![
                Value::Symbol("Fast".to_string()),
                Value::Symbol("Slow".to_string())
            ])
            .to_string(),
            "[Fast, Slow]"
        );
    }

    #[test]
    fn value_type_display() {
        assert_eq!(
            ValueType::Numeric(NumericType::Usize).to_string(),
            "usize"
        );
        assert_eq!(ValueType::Symbol(&["A", "B"]).to_string(), "{A, B}");
    }
}
