use std::collections::{HashMap, HashSet};

use crate::matcher::{ArgumentBinder, Bindings, TokenScanner};
use crate::model::{Arity, Value};
use crate::parser::{Aggregator, BoundValues, Coercer, ValidationErrors};
use crate::specification::Specification;

/// Runs one parse: scan, bind, coerce and aggregate.
pub(crate) struct Parser<'s> {
    specification: &'s Specification,
}

impl<'s> Parser<'s> {
    pub(crate) fn new(specification: &'s Specification) -> Self {
        Self { specification }
    }

    pub(crate) fn consume(self, tokens: &[&str]) -> Result<BoundValues, ValidationErrors> {
        let specification = self.specification;
        // 1. Bind the lexical tokens to the specification, as raw strings.
        let scanner = TokenScanner::new(tokens.iter().copied());
        let Bindings {
            values: raw_values,
            unparsed,
            failures,
            help_requested,
        } = ArgumentBinder::new(specification).bind(scanner);
        let mut aggregator = Aggregator::default();
        aggregator.extend(failures);

        if help_requested {
            return aggregator.finish(BoundValues::default());
        }

        // 2. Coerce each option in declaration order, then the unparsed remainder.
        let mut values: HashMap<String, Value> = HashMap::default();
        let mut present: HashSet<String> = HashSet::default();
        let mut coercer = Coercer::new(&mut aggregator);

        for option in specification.options() {
            let raw = raw_values.get(option.identity());

            if raw.is_some() {
                present.insert(option.identity().to_string());
            }

            values.insert(
                option.identity().to_string(),
                coercer.coerce_option(option, raw),
            );
        }

        if let Some(collector) = specification.unparsed() {
            if !unparsed.is_empty() {
                present.insert(collector.identity().to_string());
            }

            values.insert(
                collector.identity().to_string(),
                coercer.coerce_unparsed(collector, &unparsed),
            );
        }

        // 3. Answer the presence accessors.
        for (accessor, target) in specification.presence_accessors() {
            values.insert(
                accessor.to_string(),
                Value::Boolean(present.contains(target)),
            );
        }

        aggregator.finish(BoundValues::new(values, present))
    }
}

impl Specification {
    /// Parse the argument list (excluding the program name) against this specification.
    ///
    /// All failures are collected; the result is either the complete value set or the complete, ordered failure list.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Accessor, Bindable, Contract, FailureKind, Marker, OptionMarker, SpecificationBuilder, Value};
    ///
    /// let contract = Contract::new("program")
    ///     .accessor(Accessor::new("count", u32::declared_type()).marker(Marker::Option(OptionMarker::default())));
    /// let specification = SpecificationBuilder::new().build(&contract).unwrap();
    ///
    /// let values = specification.parse(&["--count", "5"]).unwrap();
    /// assert_eq!(values.get("count"), Some(&Value::Unsigned(5)));
    ///
    /// let errors = specification.parse(&["--other"]).unwrap_err();
    /// assert_eq!(errors.kinds(), vec![FailureKind::UnexpectedOption, FailureKind::MissingOption]);
    /// ```
    pub fn parse(&self, tokens: &[&str]) -> Result<BoundValues, ValidationErrors> {
        Parser::new(self).consume(tokens)
    }

    /// Render the value set back into an argument list.
    ///
    /// Only options seen on the Cli are rendered (`--long`, or `--long=value` once per element), followed by `--` and the unparsed values when any were supplied.
    /// Parsing the rendered list yields an equal value set.
    pub fn render_arguments(&self, values: &BoundValues) -> Vec<String> {
        let mut arguments = Vec::default();

        for option in self.options() {
            if !values.is_present(option.identity()) {
                continue;
            }

            let long = option.long_name();

            match (option.arity(), values.get(option.identity())) {
                (Arity::Single, Some(value)) if !value.is_absent() => {
                    arguments.push(format!("--{long}={value}"));
                }
                (Arity::Multiple, Some(Value::List(elements))) if !elements.is_empty() => {
                    for element in elements {
                        arguments.push(format!("--{long}={element}"));
                    }
                }
                _ => {
                    arguments.push(format!("--{long}"));
                }
            }
        }

        if let Some(collector) = self.unparsed() {
            if values.is_present(collector.identity()) {
                if let Some(Value::List(elements)) = values.get(collector.identity()) {
                    arguments.push("--".to_string());
                    arguments.extend(elements.iter().map(ToString::to_string));
                }
            }
        }

        arguments
    }
}
