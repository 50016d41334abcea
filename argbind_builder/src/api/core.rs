use std::marker::PhantomData;
use std::sync::OnceLock;
use thiserror::Error;

use crate::api::{Contract, ExtractError};
use crate::parser::{BoundValues, ValidationErrors};
use crate::specification::{MalformedSpecification, Specification, SpecificationBuilder};

/// Failure of a contract-level parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The contract itself is malformed (a programming error).
    #[error(transparent)]
    Malformed(#[from] MalformedSpecification),

    /// The argument list does not satisfy the contract.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// Behaviour of an option contract: a type whose values are bound from the Cli.
///
/// Typically derived via `#[derive(OptionContract)]`.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::prelude::*;
/// use argbind::{
///     Accessor, BoundValues, Contract, ExtractError, Marker, MalformedSpecification,
///     OptionMarker, Specification, SpecificationCache,
/// };
///
/// struct Options {
///     count: u32,
/// }
///
/// impl OptionContract for Options {
///     fn contract() -> Contract {
///         Contract::new("program").accessor(
///             Accessor::new("count", u32::declared_type())
///                 .marker(Marker::Option(OptionMarker::default().short('c'))),
///         )
///     }
///
///     fn specification() -> Result<&'static Specification, MalformedSpecification> {
///         static CACHE: SpecificationCache = SpecificationCache::new();
///         CACHE.get_or_build(Self::contract)
///     }
///
///     fn construct(mut values: BoundValues) -> Result<Self, ExtractError> {
///         Ok(Self {
///             count: values.take("count")?,
///         })
///     }
/// }
///
/// let options = Options::parse_arguments(&["-c", "3"]).unwrap();
/// assert_eq!(options.count, 3);
/// ```
pub trait OptionContract: Sized {
    /// The declaration table of this contract.
    fn contract() -> Contract;

    /// The specification of this contract, built once and cached.
    fn specification() -> Result<&'static Specification, MalformedSpecification>;

    /// Build the live object from a validated value set.
    fn construct(values: BoundValues) -> Result<Self, ExtractError>;

    /// Parse the argument list (excluding the program name) into the live object.
    fn parse_arguments(tokens: &[&str]) -> Result<Self, ParseError> {
        let specification = Self::specification()?;
        let values = specification.parse(tokens)?;
        Self::construct(values)
            .map_err(|error| ParseError::Invalid(ValidationErrors::unable_to_construct(error)))
    }

    /// Parse the process arguments (`std::env::args`, skipping the program name) into the live object.
    fn parse_env() -> Result<Self, ParseError> {
        let arguments: Vec<String> = std::env::args().skip(1).collect();
        let tokens: Vec<&str> = arguments.iter().map(String::as_str).collect();
        Self::parse_arguments(&tokens)
    }
}

/// A populate-once, read-many cache for the specification of one contract type.
///
/// Intended as a `static`; reads after the first build do not lock.
#[derive(Debug)]
pub struct SpecificationCache(OnceLock<Result<Specification, MalformedSpecification>>);

impl SpecificationCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Get the cached specification, building it (with a lenient builder) from the contract on first use.
    /// A malformed contract stays malformed: the error is cached too.
    pub fn get_or_build(
        &'static self,
        contract: impl FnOnce() -> Contract,
    ) -> Result<&'static Specification, MalformedSpecification> {
        self.0
            .get_or_init(|| SpecificationBuilder::new().build(&contract()))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl Default for SpecificationCache {
    fn default() -> Self {
        Self::new()
    }
}

/// An owned parser for one contract type, with an explicitly configured [`SpecificationBuilder`].
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// # use argbind::prelude::*;
/// # use argbind::{Accessor, BoundValues, Contract, ExtractError, Marker, MalformedSpecification, OptionMarker, Specification, SpecificationCache};
/// # struct Options { name: String }
/// # impl OptionContract for Options {
/// #     fn contract() -> Contract {
/// #         Contract::new("program").accessor(Accessor::new("name", String::declared_type()).marker(Marker::Option(OptionMarker::default())))
/// #     }
/// #     fn specification() -> Result<&'static Specification, MalformedSpecification> {
/// #         static CACHE: SpecificationCache = SpecificationCache::new();
/// #         CACHE.get_or_build(Self::contract)
/// #     }
/// #     fn construct(mut values: BoundValues) -> Result<Self, ExtractError> {
/// #         Ok(Self { name: values.take("name")? })
/// #     }
/// # }
/// use argbind::{ContractParser, SpecificationBuilder};
///
/// let parser: ContractParser<Options> =
///     ContractParser::with_builder(SpecificationBuilder::new().strict(true)).unwrap();
/// let options = parser.parse_tokens(&["--name", "abc"]).unwrap();
/// assert_eq!(options.name, "abc");
/// ```
#[derive(Debug)]
pub struct ContractParser<O> {
    specification: Specification,
    _phantom: PhantomData<fn() -> O>,
}

impl<O: OptionContract> ContractParser<O> {
    /// Create a parser with a lenient builder.
    pub fn new() -> Result<Self, MalformedSpecification> {
        Self::with_builder(SpecificationBuilder::new())
    }

    /// Create a parser with the given builder.
    pub fn with_builder(builder: SpecificationBuilder) -> Result<Self, MalformedSpecification> {
        Ok(Self {
            specification: builder.build(&O::contract())?,
            _phantom: PhantomData,
        })
    }

    /// The specification of the contract.
    pub fn specification(&self) -> &Specification {
        &self.specification
    }

    /// Parse the argument list (excluding the program name) into the live object.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<O, ValidationErrors> {
        let values = self.specification.parse(tokens)?;
        O::construct(values).map_err(ValidationErrors::unable_to_construct)
    }
}
