use crate::model::DeclaredType;

/// The declarative option contract: a named table of accessors.
///
/// This is the input to the [`SpecificationBuilder`](./struct.SpecificationBuilder.html).
/// Typically it is generated via `#[derive(OptionContract)]`, but it may also be written by hand.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{Accessor, Bindable, Contract, Marker, OptionMarker, UnparsedMarker};
///
/// let contract = Contract::new("program")
///     .accessor(
///         Accessor::new("name", String::declared_type())
///             .marker(Marker::Option(OptionMarker::default().short('n'))),
///     )
///     .accessor(
///         Accessor::new("files", Vec::<String>::declared_type())
///             .marker(Marker::Unparsed(UnparsedMarker::default())),
///     );
///
/// assert_eq!(contract.accessors().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contract {
    name: String,
    accessors: Vec<Accessor>,
}

impl Contract {
    /// Create an empty contract.
    /// The name appears in the usage summary.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accessors: Vec::default(),
        }
    }

    /// Declare an accessor on the contract.
    /// Accessors keep their declaration order.
    pub fn accessor(mut self, accessor: Accessor) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// The contract name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared accessors, in declaration order.
    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }
}

/// A single accessor of a [`Contract`].
///
/// Only accessors with a [`Marker`] take part in the specification.
/// Accessors that declare parameters are not plain readers; see [`SpecificationBuilder::strict`](./struct.SpecificationBuilder.html#method.strict).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    name: String,
    parameters: Vec<String>,
    declared_type: DeclaredType,
    marker: Option<Marker>,
}

impl Accessor {
    /// Create an un-marked accessor.
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::default(),
            declared_type,
            marker: None,
        }
    }

    /// Declare a parameter on this accessor.
    pub fn parameter(mut self, type_name: impl Into<String>) -> Self {
        self.parameters.push(type_name.into());
        self
    }

    /// Mark the accessor.
    /// If repeated, only the final marker will apply.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker.replace(marker);
        self
    }

    /// The accessor name, which serves as its identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared parameter types.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The declared (return) type.
    pub fn declared_type(&self) -> DeclaredType {
        self.declared_type
    }

    /// The marker, if any.
    pub fn marker_ref(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }
}

/// How an accessor takes part in the specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// An option (or flag, when boolean typed).
    Option(OptionMarker),
    /// The collector of the unparsed remainder.
    Unparsed(UnparsedMarker),
    /// Reports whether the named option was present on the Cli.
    Presence(String),
}

/// Configuration for an option accessor.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::OptionMarker;
///
/// let marker = OptionMarker::default()
///     .long("log-level")
///     .short('l')
///     .default_value("info")
///     .description("The logging threshold.");
/// assert_eq!(marker.defaults(), Some(&vec!["info".to_string()]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMarker {
    long_name: Option<String>,
    short_name: Option<char>,
    defaults: Option<Vec<String>>,
    optional: bool,
    help_request: bool,
    description: Option<String>,
    pattern: Option<String>,
    exactly: Option<usize>,
    minimum: Option<usize>,
    maximum: Option<usize>,
}

impl OptionMarker {
    /// Override the long name (by default, the identity with `_` replaced by `-`).
    pub fn long(mut self, name: impl Into<String>) -> Self {
        self.long_name.replace(name.into());
        self
    }

    /// Set the short name.
    pub fn short(mut self, name: char) -> Self {
        self.short_name.replace(name);
        self
    }

    /// Add a default value.
    /// Repeat for sequence typed options; the declared order is preserved.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.defaults.get_or_insert_with(Vec::default).push(value.into());
        self
    }

    /// Allow the option to be omitted even though it has no default.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark this flag as the help request.
    pub fn help_request(mut self) -> Self {
        self.help_request = true;
        self
    }

    /// Document the option.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Require every value to fully match the regular expression.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern.replace(pattern.into());
        self
    }

    /// Require precisely `n` values (sequence typed options only).
    pub fn exactly(mut self, n: usize) -> Self {
        self.exactly.replace(n);
        self
    }

    /// Require at least `n` values (sequence typed options only).
    pub fn minimum(mut self, n: usize) -> Self {
        self.minimum.replace(n);
        self
    }

    /// Require at most `n` values (sequence typed options only).
    pub fn maximum(mut self, n: usize) -> Self {
        self.maximum.replace(n);
        self
    }

    /// The explicit long name.
    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    /// The short name.
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// The raw default values.
    pub fn defaults(&self) -> Option<&Vec<String>> {
        self.defaults.as_ref()
    }

    pub(crate) fn is_optional(&self) -> bool {
        self.optional
    }

    pub(crate) fn is_help_request(&self) -> bool {
        self.help_request
    }

    pub(crate) fn description_ref(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn pattern_ref(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub(crate) fn counts(&self) -> (Option<usize>, Option<usize>, Option<usize>) {
        (self.exactly, self.minimum, self.maximum)
    }
}

/// Configuration for the unparsed remainder accessor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnparsedMarker {
    defaults: Option<Vec<String>>,
    description: Option<String>,
}

impl UnparsedMarker {
    /// Add a default value, used when no unparsed values are supplied.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.defaults.get_or_insert_with(Vec::default).push(value.into());
        self
    }

    /// Document the remainder.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The raw default values.
    pub fn defaults(&self) -> Option<&Vec<String>> {
        self.defaults.as_ref()
    }

    pub(crate) fn description_ref(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
