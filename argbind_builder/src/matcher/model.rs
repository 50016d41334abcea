use std::collections::HashMap;

use crate::parser::ValidationFailure;

/// A lexical unit of the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    Long {
        name: &'t str,
        attached: Option<&'t str>,
    },
    Short {
        name: char,
        attached: Option<&'t str>,
    },
    Value(&'t str),
    EndOfOptions,
}

/// The raw (un-coerced) capture of one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawValue {
    Present,
    Single(String),
    Multiple(Vec<String>),
}

/// The outcome of binding the tokens to the specification.
#[derive(Debug, Default)]
pub(crate) struct Bindings {
    /// The raw captures, keyed by identity; an entry exists iff the option was seen.
    pub values: HashMap<String, RawValue>,
    pub unparsed: Vec<String>,
    pub failures: Vec<ValidationFailure>,
    pub help_requested: bool,
}
