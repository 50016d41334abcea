use thiserror::Error;

use crate::api::ExtractError;
use crate::parser::CoerceError;
use crate::specification::{OptionSpecification, Specification};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The kind of a [`ValidationFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// An option name (long or short) that the specification does not declare.
    UnexpectedOption,
    /// A value attached to a flag.
    UnexpectedValue,
    /// A required option that did not appear.
    MissingOption,
    /// A value that does not coerce to the declared type.
    InvalidValueForType,
    /// A value that does not fully match the declared pattern.
    PatternMismatch,
    /// Fewer values than the declared minimum.
    TooFewValues,
    /// More values than the declared maximum.
    TooManyValues,
    /// A value count other than the declared exact count.
    WrongNumberOfValues,
    /// The help request option appeared; the message is the usage summary.
    HelpRequested,
    /// The live object could not be built from the bound values.
    UnableToConstruct,
}

/// One discovered problem with the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    kind: FailureKind,
    identity: Option<String>,
    message: String,
}

impl ValidationFailure {
    /// The kind of failure.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The offending option identity (or unknown option name), where applicable.
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn new(kind: FailureKind, identity: Option<String>, message: String) -> Self {
        Self {
            kind,
            identity,
            message,
        }
    }

    pub(crate) fn unexpected_option(name: &str) -> Self {
        Self::new(
            FailureKind::UnexpectedOption,
            Some(name.to_string()),
            format!("Option '{name}' does not exist."),
        )
    }

    pub(crate) fn unexpected_short_option(name: char) -> Self {
        Self::new(
            FailureKind::UnexpectedOption,
            Some(name.to_string()),
            format!("Short option '{name}' does not exist."),
        )
    }

    pub(crate) fn unexpected_value(option: &OptionSpecification, value: &str) -> Self {
        Self::new(
            FailureKind::UnexpectedValue,
            Some(option.identity().to_string()),
            format!(
                "Option '{}' does not take a value (found '{value}').",
                option.long_name()
            ),
        )
    }

    pub(crate) fn missing_option(option: &OptionSpecification) -> Self {
        Self::new(
            FailureKind::MissingOption,
            Some(option.identity().to_string()),
            format!("Option '{}' is mandatory.", option.long_name()),
        )
    }

    pub(crate) fn invalid_value(identity: &str, error: CoerceError) -> Self {
        Self::new(
            FailureKind::InvalidValueForType,
            Some(identity.to_string()),
            error.to_string(),
        )
    }

    pub(crate) fn pattern_mismatch(option: &OptionSpecification, value: &str) -> Self {
        Self::new(
            FailureKind::PatternMismatch,
            Some(option.identity().to_string()),
            format!(
                "Value '{value}' of option '{}' does not match the pattern '{}'.",
                option.long_name(),
                option.pattern().unwrap_or_default()
            ),
        )
    }

    pub(crate) fn too_few_values(option: &OptionSpecification, found: usize, minimum: usize) -> Self {
        Self::new(
            FailureKind::TooFewValues,
            Some(option.identity().to_string()),
            format!(
                "Option '{}' requires at least {minimum} values (found {found}).",
                option.long_name()
            ),
        )
    }

    pub(crate) fn too_many_values(
        option: &OptionSpecification,
        found: usize,
        maximum: usize,
    ) -> Self {
        Self::new(
            FailureKind::TooManyValues,
            Some(option.identity().to_string()),
            format!(
                "Option '{}' allows at most {maximum} values (found {found}).",
                option.long_name()
            ),
        )
    }

    pub(crate) fn wrong_number_of_values(
        option: &OptionSpecification,
        found: usize,
        exactly: usize,
    ) -> Self {
        Self::new(
            FailureKind::WrongNumberOfValues,
            Some(option.identity().to_string()),
            format!(
                "Option '{}' requires exactly {exactly} values (found {found}).",
                option.long_name()
            ),
        )
    }

    pub(crate) fn help_requested(specification: &Specification) -> Self {
        Self::new(FailureKind::HelpRequested, None, specification.to_string())
    }

    pub(crate) fn unable_to_construct(error: ExtractError) -> Self {
        Self::new(
            FailureKind::UnableToConstruct,
            None,
            format!("Unable to construct the options: {error}"),
        )
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// The complete, ordered list of failures from one parse.
///
/// Displays one failure message per line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", join_messages(.failures))]
pub struct ValidationErrors {
    failures: Vec<ValidationFailure>,
}

impl ValidationErrors {
    /// The failures, in discovery order.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Take the failures, in discovery order.
    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }

    /// The failure kinds, in discovery order.
    pub fn kinds(&self) -> Vec<FailureKind> {
        self.failures.iter().map(ValidationFailure::kind).collect()
    }

    /// Whether the parse stopped because help was requested.
    /// When so, this is the only failure and its message is the usage summary.
    pub fn is_help_requested(&self) -> bool {
        matches!(&self.failures[..], [failure] if failure.kind == FailureKind::HelpRequested)
    }

    pub(crate) fn unable_to_construct(error: ExtractError) -> Self {
        Self {
            failures: vec![ValidationFailure::unable_to_construct(error)],
        }
    }
}

fn join_messages(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ValidationFailure::message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collects the failures from binding and coercion into one report.
#[derive(Debug, Default)]
pub(crate) struct Aggregator {
    failures: Vec<ValidationFailure>,
}

impl Aggregator {
    pub(crate) fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    pub(crate) fn extend(&mut self, failures: impl IntoIterator<Item = ValidationFailure>) {
        self.failures.extend(failures);
    }

    pub(crate) fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Aggregated {} validation failure(s).", self.failures.len());
        }

        if self.failures.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors {
                failures: self.failures,
            })
        }
    }
}
