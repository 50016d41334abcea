//! Builder module for `argbind`.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod specification;

pub use api::*;
pub use model::*;
pub use parser::{BoundValues, FailureKind, ValidationErrors, ValidationFailure};
pub use specification::{
    MalformedSpecification, OptionSpecification, Specification, SpecificationBuilder,
    UnparsedSpecification,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
