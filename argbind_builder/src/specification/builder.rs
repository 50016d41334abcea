use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::api::{Accessor, Contract, Marker, OptionMarker, UnparsedMarker};
use crate::model::{Arity, DeclaredType, Value, ValueType};
use crate::parser::coerce_scalar;
use crate::specification::model::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The contract cannot be turned into a specification.
/// This is a programming error in the contract, and is never mixed with parse-time failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed specification: {0}")]
pub struct MalformedSpecification(pub(crate) String);

/// Derives a [`Specification`] from a [`Contract`].
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::{Accessor, Bindable, Contract, Marker, OptionMarker, SpecificationBuilder};
///
/// let contract = Contract::new("program").accessor(
///     Accessor::new("log_level", String::declared_type())
///         .marker(Marker::Option(OptionMarker::default().default_value("info"))),
/// );
///
/// let specification = SpecificationBuilder::new().build(&contract).unwrap();
/// let option = specification.option("log_level").unwrap();
/// assert_eq!(option.long_name(), "log-level");
/// assert!(!option.is_required());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecificationBuilder {
    strict: bool,
}

impl SpecificationBuilder {
    /// Create a lenient builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether marked accessors that declare parameters are malformed (strict) or excluded from the specification (lenient, the default).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the specification for the contract.
    pub fn build(&self, contract: &Contract) -> Result<Specification, MalformedSpecification> {
        let mut identities: HashSet<&str> = HashSet::default();
        let mut options: Vec<OptionSpecification> = Vec::default();
        let mut long_names: HashMap<String, usize> = HashMap::default();
        let mut short_names: HashMap<char, usize> = HashMap::default();
        let mut unparsed: Option<UnparsedSpecification> = None;
        let mut presence: Vec<(String, String)> = Vec::default();

        for accessor in contract.accessors() {
            let marker = match accessor.marker_ref() {
                Some(marker) => marker,
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Excluding un-marked accessor '{}'.", accessor.name());
                    }

                    continue;
                }
            };

            if !accessor.parameters().is_empty() {
                if self.strict {
                    return Err(MalformedSpecification(format!(
                        "Accessor '{}' cannot declare parameters.",
                        accessor.name()
                    )));
                }

                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Excluding accessor '{}' which declares parameters {:?}.",
                        accessor.name(),
                        accessor.parameters()
                    );
                }

                continue;
            }

            if !identities.insert(accessor.name()) {
                return Err(MalformedSpecification(format!(
                    "Cannot duplicate the identity '{}'.",
                    accessor.name()
                )));
            }

            match marker {
                Marker::Option(option_marker) => {
                    let option = build_option(accessor, option_marker)?;
                    let index = options.len();

                    if long_names.insert(option.long_name.clone(), index).is_some() {
                        return Err(MalformedSpecification(format!(
                            "Cannot duplicate the option '--{}'.",
                            option.long_name
                        )));
                    }

                    if let Some(short) = option.short_name {
                        if short_names.insert(short, index).is_some() {
                            return Err(MalformedSpecification(format!(
                                "Cannot duplicate the short option '-{short}'."
                            )));
                        }
                    }

                    options.push(option);
                }
                Marker::Unparsed(unparsed_marker) => {
                    if let Some(existing) = &unparsed {
                        return Err(MalformedSpecification(format!(
                            "Cannot declare more than one unparsed accessor ('{}', '{}').",
                            existing.identity,
                            accessor.name()
                        )));
                    }

                    unparsed.replace(build_unparsed(accessor, unparsed_marker)?);
                }
                Marker::Presence(target) => {
                    let declared = accessor.declared_type();

                    if declared.element() != ValueType::Boolean || declared.is_sequence() {
                        return Err(MalformedSpecification(format!(
                            "Presence accessor '{}' must be bool typed.",
                            accessor.name()
                        )));
                    }

                    presence.push((accessor.name().to_string(), target.clone()));
                }
            }
        }

        for (accessor, target) in &presence {
            match options.iter_mut().find(|o| &o.identity == target) {
                Some(option) => {
                    if may_be_absent(option.arity, option.defaults.as_ref(), option.declared_type) {
                        return Err(MalformedSpecification(format!(
                            "Option '{target}' may be absent (presence accessor '{accessor}'), so its type must be optional."
                        )));
                    }

                    option.required = false;
                }
                None => {
                    return Err(MalformedSpecification(format!(
                        "Presence accessor '{accessor}' targets the unknown option '{target}'."
                    )));
                }
            }
        }

        Ok(Specification {
            name: contract.name().to_string(),
            options,
            long_names,
            short_names,
            unparsed,
            presence,
        })
    }
}

fn build_option(
    accessor: &Accessor,
    marker: &OptionMarker,
) -> Result<OptionSpecification, MalformedSpecification> {
    let identity = accessor.name().to_string();
    let declared_type = accessor.declared_type();
    let arity = declared_type.arity();
    let long_name = match marker.long_name() {
        Some(name) => name.to_string(),
        None => identity.replace('_', "-"),
    };

    if long_name.is_empty() || long_name.contains('=') {
        return Err(MalformedSpecification(format!(
            "Option '{identity}' has an invalid long name '{long_name}'."
        )));
    }

    let (exactly, minimum, maximum) = marker.counts();
    let has_counts = exactly.is_some() || minimum.is_some() || maximum.is_some();

    if arity == Arity::Flag
        && (marker.defaults().is_some() || marker.pattern_ref().is_some() || has_counts)
    {
        return Err(MalformedSpecification(format!(
            "Flag '{identity}' cannot declare defaults, a pattern or value counts."
        )));
    }

    if marker.is_help_request() && arity != Arity::Flag {
        return Err(MalformedSpecification(format!(
            "Help request '{identity}' must be a flag."
        )));
    }

    if has_counts {
        if arity != Arity::Multiple {
            return Err(MalformedSpecification(format!(
                "Option '{identity}' declares value counts but is not {}.",
                Arity::Multiple
            )));
        }

        if exactly.is_some() && (minimum.is_some() || maximum.is_some()) {
            return Err(MalformedSpecification(format!(
                "Option '{identity}' cannot mix an exact value count with a minimum/maximum."
            )));
        }

        if let (Some(min), Some(max)) = (minimum, maximum) {
            if min > max {
                return Err(MalformedSpecification(format!(
                    "Option '{identity}' declares a minimum {min} above its maximum {max}."
                )));
            }
        }
    }

    let pattern = match marker.pattern_ref() {
        Some(source) => Some(ValuePattern::new(source).map_err(|error| {
            MalformedSpecification(format!("Option '{identity}' has an invalid pattern: {error}"))
        })?),
        None => None,
    };

    let defaults = match marker.defaults() {
        Some(raw) => {
            if arity == Arity::Single && raw.len() > 1 {
                return Err(MalformedSpecification(format!(
                    "Option '{identity}' is {} but declares {} defaults.",
                    Arity::Single,
                    raw.len()
                )));
            }

            Some(coerce_defaults(&identity, declared_type, raw)?)
        }
        None => None,
    };

    let required = arity != Arity::Flag
        && defaults.is_none()
        && !declared_type.is_optional()
        && !marker.is_optional();

    if marker.is_optional() && may_be_absent(arity, defaults.as_ref(), declared_type) {
        return Err(MalformedSpecification(format!(
            "Option '{identity}' may be absent, so its type must be optional."
        )));
    }

    Ok(OptionSpecification {
        identity,
        long_name,
        short_name: marker.short_name(),
        arity,
        declared_type,
        required,
        defaults,
        description: marker.description_ref().map(str::to_string),
        help_request: marker.is_help_request(),
        pattern,
        count: ValueCount {
            exactly,
            minimum,
            maximum,
        },
    })
}

// An absent single value without a default can only be extracted into an optional type.
fn may_be_absent(arity: Arity, defaults: Option<&Value>, declared_type: DeclaredType) -> bool {
    arity == Arity::Single && defaults.is_none() && !declared_type.is_optional()
}

fn build_unparsed(
    accessor: &Accessor,
    marker: &UnparsedMarker,
) -> Result<UnparsedSpecification, MalformedSpecification> {
    let identity = accessor.name().to_string();
    let declared_type = accessor.declared_type();

    if !declared_type.is_sequence() {
        return Err(MalformedSpecification(format!(
            "Unparsed accessor '{identity}' must be sequence typed."
        )));
    }

    let defaults = match marker.defaults() {
        Some(raw) => Some(coerce_defaults(&identity, declared_type, raw)?),
        None => None,
    };

    Ok(UnparsedSpecification {
        identity,
        declared_type,
        defaults,
        description: marker.description_ref().map(str::to_string),
    })
}

fn coerce_defaults(
    identity: &str,
    declared_type: DeclaredType,
    raw: &[String],
) -> Result<Value, MalformedSpecification> {
    let mut values = Vec::with_capacity(raw.len());

    for value in raw {
        values.push(coerce_scalar(declared_type.element(), value).map_err(|error| {
            MalformedSpecification(format!(
                "Option '{identity}' has an invalid default '{value}': {error}"
            ))
        })?);
    }

    if declared_type.is_sequence() {
        Ok(Value::List(values))
    } else {
        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("internal error - a declared default must have a value"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Bindable;
    use crate::test::assert_contains;
    use rstest::rstest;

    fn option(name: &str, declared_type: DeclaredType, marker: OptionMarker) -> Accessor {
        Accessor::new(name, declared_type).marker(Marker::Option(marker))
    }

    #[test]
    fn build_empty() {
        // Setup
        let contract = Contract::new("program");

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert_eq!(specification.name(), "program");
        assert!(specification.options().is_empty());
        assert!(specification.unparsed().is_none());
    }

    #[rstest]
    #[case(bool::declared_type(), Arity::Flag)]
    #[case(u32::declared_type(), Arity::Single)]
    #[case(Option::<char>::declared_type(), Arity::Single)]
    #[case(Vec::<String>::declared_type(), Arity::Multiple)]
    #[case(Vec::<bool>::declared_type(), Arity::Multiple)]
    fn build_arity(#[case] declared_type: DeclaredType, #[case] expected: Arity) {
        // Setup
        let contract = Contract::new("program").accessor(option(
            "item",
            declared_type,
            OptionMarker::default(),
        ));

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert_eq!(specification.option("item").unwrap().arity(), expected);
    }

    #[rstest]
    #[case(String::declared_type(), OptionMarker::default(), true)]
    #[case(Vec::<String>::declared_type(), OptionMarker::default(), true)]
    #[case(bool::declared_type(), OptionMarker::default(), false)]
    #[case(Option::<String>::declared_type(), OptionMarker::default(), false)]
    #[case(Option::<String>::declared_type(), OptionMarker::default().optional(), false)]
    #[case(Vec::<String>::declared_type(), OptionMarker::default().optional(), false)]
    #[case(String::declared_type(), OptionMarker::default().optional().default_value("x"), false)]
    #[case(String::declared_type(), OptionMarker::default().default_value("x"), false)]
    #[case(Vec::<u8>::declared_type(), OptionMarker::default().default_value("1"), false)]
    fn build_required(
        #[case] declared_type: DeclaredType,
        #[case] marker: OptionMarker,
        #[case] expected: bool,
    ) {
        // Setup
        let contract = Contract::new("program").accessor(option("item", declared_type, marker));

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert_eq!(specification.option("item").unwrap().is_required(), expected);
    }

    #[test]
    fn build_presence_target_optional() {
        // Setup
        let contract = Contract::new("program")
            .accessor(option("name", Vec::<String>::declared_type(), OptionMarker::default()))
            .accessor(
                Accessor::new("is_name", bool::declared_type())
                    .marker(Marker::Presence("name".to_string())),
            );

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert!(!specification.option("name").unwrap().is_required());
        assert_eq!(
            specification.presence_accessors().collect::<Vec<_>>(),
            vec![("is_name", "name")]
        );
        // Presence accessors are not options.
        assert!(specification.option("is_name").is_none());
    }

    #[test]
    fn build_names() {
        // Setup
        let contract = Contract::new("program")
            .accessor(option(
                "log_level",
                String::declared_type(),
                OptionMarker::default().short('l'),
            ))
            .accessor(option(
                "verbose",
                bool::declared_type(),
                OptionMarker::default().long("loud"),
            ));

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert_eq!(
            specification.find_long("log-level").unwrap().identity(),
            "log_level"
        );
        assert_eq!(specification.find_short('l').unwrap().identity(), "log_level");
        assert_eq!(specification.find_long("loud").unwrap().identity(), "verbose");
        assert!(specification.find_long("verbose").is_none());
        assert!(specification.find_long("log_level").is_none());
    }

    #[test]
    fn build_coerces_defaults() {
        // Setup
        let contract = Contract::new("program")
            .accessor(option(
                "count",
                i16::declared_type(),
                OptionMarker::default().default_value("-3"),
            ))
            .accessor(option(
                "letters",
                Vec::<char>::declared_type(),
                OptionMarker::default().default_value("b").default_value("a"),
            ));

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert_eq!(
            specification.option("count").unwrap().defaults(),
            Some(&Value::Signed(-3))
        );
        assert_eq!(
            specification.option("letters").unwrap().defaults(),
            Some(&Value::List(vec![Value::Character('b'), Value::Character('a')]))
        );
    }

    #[test]
    fn build_excludes_unmarked() {
        // Setup
        let contract = Contract::new("program")
            .accessor(Accessor::new("name", String::declared_type()))
            .accessor(option("count", u8::declared_type(), OptionMarker::default()));

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert!(specification.option("name").is_none());
        assert!(specification.option("count").is_some());
    }

    #[test]
    fn build_parameterised_lenient() {
        // Setup
        let contract = Contract::new("program").accessor(
            option("name", String::declared_type(), OptionMarker::default()).parameter("String"),
        );

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        assert!(specification.option("name").is_none());
        assert!(specification.find_long("name").is_none());
    }

    #[test]
    fn build_parameterised_strict() {
        // Setup
        let contract = Contract::new("program").accessor(
            option("name", String::declared_type(), OptionMarker::default()).parameter("String"),
        );

        // Execute
        let error = SpecificationBuilder::new()
            .strict(true)
            .build(&contract)
            .unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "Malformed specification: ");
        assert_contains!(error.to_string(), "'name' cannot declare parameters");
    }

    #[test]
    fn build_unparsed() {
        // Setup
        let contract = Contract::new("program").accessor(
            Accessor::new("files", Vec::<String>::declared_type())
                .marker(Marker::Unparsed(UnparsedMarker::default().default_value("a.txt"))),
        );

        // Execute
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Verify
        let unparsed = specification.unparsed().unwrap();
        assert_eq!(unparsed.identity(), "files");
        assert_eq!(
            unparsed.defaults(),
            Some(&Value::List(vec![Value::Text("a.txt".to_string())]))
        );
    }

    #[rstest]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default()),
        option("name", u8::declared_type(), OptionMarker::default().long("other")),
    ], "Cannot duplicate the identity 'name'.")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default()),
        option("other", String::declared_type(), OptionMarker::default().long("name")),
    ], "Cannot duplicate the option '--name'.")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().short('n')),
        option("number", u8::declared_type(), OptionMarker::default().short('n')),
    ], "Cannot duplicate the short option '-n'.")]
    #[case(vec![
        Accessor::new("a", Vec::<String>::declared_type()).marker(Marker::Unparsed(UnparsedMarker::default())),
        Accessor::new("b", Vec::<String>::declared_type()).marker(Marker::Unparsed(UnparsedMarker::default())),
    ], "more than one unparsed accessor ('a', 'b')")]
    #[case(vec![
        Accessor::new("files", String::declared_type()).marker(Marker::Unparsed(UnparsedMarker::default())),
    ], "'files' must be sequence typed")]
    #[case(vec![
        option("verbose", bool::declared_type(), OptionMarker::default().default_value("true")),
    ], "Flag 'verbose' cannot declare")]
    #[case(vec![
        option("verbose", bool::declared_type(), OptionMarker::default().pattern("t.*")),
    ], "Flag 'verbose' cannot declare")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().help_request()),
    ], "Help request 'name' must be a flag.")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().default_value("a").default_value("b")),
    ], "declares 2 defaults")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().minimum(1)),
    ], "is not multiple")]
    #[case(vec![
        option("names", Vec::<String>::declared_type(), OptionMarker::default().exactly(2).maximum(3)),
    ], "cannot mix an exact value count")]
    #[case(vec![
        option("names", Vec::<String>::declared_type(), OptionMarker::default().minimum(3).maximum(2)),
    ], "minimum 3 above its maximum 2")]
    #[case(vec![
        option("count", u8::declared_type(), OptionMarker::default().default_value("300")),
    ], "invalid default '300'")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().pattern("(")),
    ], "'name' has an invalid pattern")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().long("a=b")),
    ], "invalid long name 'a=b'")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().long("")),
    ], "invalid long name ''")]
    #[case(vec![
        Accessor::new("is_name", bool::declared_type()).marker(Marker::Presence("name".to_string())),
    ], "targets the unknown option 'name'")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default()),
        Accessor::new("is_name", String::declared_type()).marker(Marker::Presence("name".to_string())),
    ], "'is_name' must be bool typed")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default().optional()),
    ], "Option 'name' may be absent, so its type must be optional.")]
    #[case(vec![
        option("name", String::declared_type(), OptionMarker::default()),
        Accessor::new("is_name", bool::declared_type()).marker(Marker::Presence("name".to_string())),
    ], "Option 'name' may be absent (presence accessor 'is_name')")]
    fn build_malformed(#[case] accessors: Vec<Accessor>, #[case] expected: &str) {
        // Setup
        let contract = accessors
            .into_iter()
            .fold(Contract::new("program"), Contract::accessor);

        // Execute
        let error = SpecificationBuilder::new().build(&contract).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), expected);
    }

    #[test]
    fn usage_summary() {
        // Setup
        let contract = Contract::new("program")
            .accessor(option(
                "help",
                bool::declared_type(),
                OptionMarker::default().short('h').help_request(),
            ))
            .accessor(option(
                "count",
                u8::declared_type(),
                OptionMarker::default().description("How many."),
            ))
            .accessor(option(
                "names",
                Vec::<String>::declared_type(),
                OptionMarker::default().default_value("x"),
            ))
            .accessor(
                Accessor::new("files", Vec::<String>::declared_type())
                    .marker(Marker::Unparsed(UnparsedMarker::default())),
            );
        let specification = SpecificationBuilder::new().build(&contract).unwrap();

        // Execute
        let usage = specification.to_string();

        // Verify
        let lines: Vec<&str> = usage.lines().collect();
        assert_eq!(
            lines[0],
            "usage: program [--help] --count COUNT [--names NAMES ...] [-- FILES ...]"
        );
        assert_eq!(lines[1], "options:");
        assert_eq!(lines[2], "  -h, --help");
        assert_eq!(lines[3], "  --count     How many.  type: u8");
        assert_eq!(lines[4], "  --names     type: String  default: [x]");
    }
}
