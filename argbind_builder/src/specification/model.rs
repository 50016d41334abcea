use regex::Regex;
use std::collections::HashMap;

use crate::model::{Arity, DeclaredType, Value};

/// A regular expression that every value of an option must fully match.
#[derive(Debug, Clone)]
pub(crate) struct ValuePattern {
    source: String,
    anchored: Regex,
}

impl ValuePattern {
    pub(crate) fn new(source: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self {
            source: source.to_string(),
            anchored,
        })
    }

    pub(crate) fn matches(&self, value: &str) -> bool {
        self.anchored.is_match(value)
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }
}

/// The value-count constraint of a multiple arity option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ValueCount {
    pub exactly: Option<usize>,
    pub minimum: Option<usize>,
    pub maximum: Option<usize>,
}

/// The immutable description of a declared option.
#[derive(Debug, Clone)]
pub struct OptionSpecification {
    pub(crate) identity: String,
    pub(crate) long_name: String,
    pub(crate) short_name: Option<char>,
    pub(crate) arity: Arity,
    pub(crate) declared_type: DeclaredType,
    pub(crate) required: bool,
    pub(crate) defaults: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) help_request: bool,
    pub(crate) pattern: Option<ValuePattern>,
    pub(crate) count: ValueCount,
}

impl OptionSpecification {
    /// The identity (accessor name) keying this option's value.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The name used via `--NAME`.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// The name used via `-N`, if any.
    pub fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// The value arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// The declared type.
    pub fn declared_type(&self) -> DeclaredType {
        self.declared_type
    }

    /// Whether the option must appear on the Cli.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The coerced default value(s), if declared.
    pub fn defaults(&self) -> Option<&Value> {
        self.defaults.as_ref()
    }

    /// The description, if documented.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this flag requests help.
    pub fn is_help_request(&self) -> bool {
        self.help_request
    }

    /// The value pattern, if declared.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(ValuePattern::source)
    }

    fn placeholder(&self) -> String {
        self.long_name.to_ascii_uppercase().replace('-', "_")
    }

    fn usage_fragment(&self) -> String {
        let fragment = match self.arity {
            Arity::Flag => format!("--{}", self.long_name),
            Arity::Single => format!("--{} {}", self.long_name, self.placeholder()),
            Arity::Multiple => format!("--{} {} ...", self.long_name, self.placeholder()),
        };

        if self.required {
            fragment
        } else {
            format!("[{fragment}]")
        }
    }
}

/// The immutable description of the unparsed remainder collector.
#[derive(Debug, Clone)]
pub struct UnparsedSpecification {
    pub(crate) identity: String,
    pub(crate) declared_type: DeclaredType,
    pub(crate) defaults: Option<Value>,
    pub(crate) description: Option<String>,
}

impl UnparsedSpecification {
    /// The identity (accessor name) keying the remainder.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The declared (sequence) type.
    pub fn declared_type(&self) -> DeclaredType {
        self.declared_type
    }

    /// The coerced default values, if declared.
    pub fn defaults(&self) -> Option<&Value> {
        self.defaults.as_ref()
    }

    /// The description, if documented.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// The specification model: every declared option, the unparsed collector and the presence accessors.
///
/// Built once per contract via [`SpecificationBuilder`](./struct.SpecificationBuilder.html) and never mutated afterwards.
/// It is safe to share across threads.
#[derive(Debug, Clone)]
pub struct Specification {
    pub(crate) name: String,
    pub(crate) options: Vec<OptionSpecification>,
    pub(crate) long_names: HashMap<String, usize>,
    pub(crate) short_names: HashMap<char, usize>,
    pub(crate) unparsed: Option<UnparsedSpecification>,
    pub(crate) presence: Vec<(String, String)>,
}

impl Specification {
    /// The contract name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The options, in declaration order.
    pub fn options(&self) -> &[OptionSpecification] {
        &self.options
    }

    /// Find an option by identity.
    pub fn option(&self, identity: &str) -> Option<&OptionSpecification> {
        self.options.iter().find(|o| o.identity == identity)
    }

    /// The unparsed collector, if declared.
    pub fn unparsed(&self) -> Option<&UnparsedSpecification> {
        self.unparsed.as_ref()
    }

    /// The presence accessors, as `(accessor identity, option identity)` pairs.
    pub fn presence_accessors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.presence
            .iter()
            .map(|(accessor, target)| (accessor.as_str(), target.as_str()))
    }

    pub(crate) fn find_long(&self, name: &str) -> Option<&OptionSpecification> {
        self.long_names.get(name).map(|index| &self.options[*index])
    }

    pub(crate) fn find_short(&self, name: char) -> Option<&OptionSpecification> {
        self.short_names.get(&name).map(|index| &self.options[*index])
    }
}

/// The usage summary of the specification.
impl std::fmt::Display for Specification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut usage = vec![format!("usage: {}", self.name)];
        usage.extend(self.options.iter().map(OptionSpecification::usage_fragment));

        if let Some(unparsed) = &self.unparsed {
            usage.push(format!("[-- {} ...]", unparsed.identity.to_ascii_uppercase()));
        }

        write!(f, "{}", usage.join(" "))?;

        if self.options.is_empty() {
            return Ok(());
        }

        let rows: Vec<(String, String)> = self
            .options
            .iter()
            .map(|option| {
                let names = match option.short_name {
                    Some(short) => format!("-{short}, --{}", option.long_name),
                    None => format!("--{}", option.long_name),
                };
                let mut details = Vec::default();

                if let Some(description) = &option.description {
                    details.push(description.clone());
                }

                if option.arity != crate::model::Arity::Flag {
                    details.push(format!("type: {}", option.declared_type.element()));
                }

                if let Some(defaults) = &option.defaults {
                    details.push(format!("default: {defaults}"));
                }

                (names, details.join("  "))
            })
            .collect();
        let width = rows.iter().map(|(names, _)| names.len()).max().unwrap_or(0);
        write!(f, "\noptions:")?;

        for (names, details) in rows {
            if details.is_empty() {
                write!(f, "\n  {names}")?;
            } else {
                write!(f, "\n  {names:width$}  {details}")?;
            }
        }

        Ok(())
    }
}
