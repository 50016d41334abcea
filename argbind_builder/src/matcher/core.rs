use std::iter::Peekable;

use crate::matcher::model::*;
use crate::model::Arity;
use crate::parser::ValidationFailure;
use crate::specification::{OptionSpecification, Specification};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Consumes the token sequence, left to right, against a specification.
///
/// Binding never stops at the first problem: each is recorded as a failure and the scan continues.
pub(crate) struct ArgumentBinder<'s> {
    specification: &'s Specification,
}

impl<'s> ArgumentBinder<'s> {
    pub(crate) fn new(specification: &'s Specification) -> Self {
        Self { specification }
    }

    pub(crate) fn bind<'t>(&self, tokens: impl Iterator<Item = Token<'t>>) -> Bindings {
        let mut bindings = Bindings::default();
        let mut tokens = tokens.peekable();

        while let Some(token) = tokens.next() {
            match token {
                Token::Long { name, attached } => match self.specification.find_long(name) {
                    Some(option) => bind_option(option, attached, &mut tokens, &mut bindings),
                    None => bindings
                        .failures
                        .push(ValidationFailure::unexpected_option(name)),
                },
                Token::Short { name, attached } => match self.specification.find_short(name) {
                    Some(option) => bind_option(option, attached, &mut tokens, &mut bindings),
                    None => bindings
                        .failures
                        .push(ValidationFailure::unexpected_short_option(name)),
                },
                Token::Value(value) => {
                    if self.specification.unparsed().is_some() {
                        bindings.unparsed.push(value.to_string());
                    } else {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Ignoring the stray value '{value}'.");
                        }
                    }
                }
                Token::EndOfOptions => {}
            }
        }

        if bindings.help_requested {
            bindings.failures = vec![ValidationFailure::help_requested(self.specification)];
            return bindings;
        }

        for option in self.specification.options() {
            if option.is_required() && !bindings.values.contains_key(option.identity()) {
                bindings
                    .failures
                    .push(ValidationFailure::missing_option(option));
            }
        }

        bindings
    }
}

fn bind_option<'t, I>(
    option: &OptionSpecification,
    attached: Option<&'t str>,
    tokens: &mut Peekable<I>,
    bindings: &mut Bindings,
) where
    I: Iterator<Item = Token<'t>>,
{
    let identity = option.identity().to_string();

    match option.arity() {
        Arity::Flag => {
            if let Some(value) = attached {
                bindings
                    .failures
                    .push(ValidationFailure::unexpected_value(option, value));
            }

            if option.is_help_request() {
                bindings.help_requested = true;
            }

            bindings.values.insert(identity, RawValue::Present);
        }
        Arity::Single => {
            let value = attached
                .map(str::to_string)
                .or_else(|| next_value(tokens))
                .unwrap_or_default();

            if let Some(_previous) = bindings.values.insert(identity, RawValue::Single(value)) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Option '{}' repeated; replacing the previous value {_previous:?}.",
                        option.long_name()
                    );
                }
            }
        }
        Arity::Multiple => {
            let value = attached.map(str::to_string).or_else(|| next_value(tokens));
            let entry = bindings
                .values
                .entry(identity)
                .or_insert_with(|| RawValue::Multiple(Vec::default()));

            match (entry, value) {
                (RawValue::Multiple(values), Some(value)) => values.push(value),
                (RawValue::Multiple(_), None) => {}
                _ => unreachable!("internal error - a multiple option must capture multiple values"),
            }
        }
    }
}

// Only a bare value may serve as an option value; anything else is left for the main scan.
fn next_value<'t, I>(tokens: &mut Peekable<I>) -> Option<String>
where
    I: Iterator<Item = Token<'t>>,
{
    match tokens.next_if(|token| matches!(token, Token::Value(_))) {
        Some(Token::Value(value)) => Some(value.to_string()),
        _ => None,
    }
}
