//! `argbind` binds command line arguments onto strongly-typed option contracts.
//!
//! An *option contract* is a declarative description of the options a program accepts: a table of named accessors, each tagged as an option, an unparsed remainder collector, or a presence query.
//! `argbind` derives a specification from the contract, then parses, coerces and validates the Cli arguments against it.
//! The result is either a fully-populated live object, or the complete list of failures found.
//! Specifically, `argbind` attempts to prioritize the following design concerns:
//! * *Type safe argument binding*:
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Aggregated validation*:
//! Parsing never stops at the first problem.
//! Every unknown option, missing option, and invalid value is reported together, in discovery order.
//! * *Declarative contracts*:
//! The contract is a plain struct instrumented via the [derive Api](./derive/index.html), or an explicit [`Contract`] table written by hand.
//! * *Deterministic grammar*:
//! `--name[=value]`, `-c[value]`, bare values, and `--`.
//! There is no short option bundling.
//! * *Basic UX*:
//! The usage summary is a plain, single-width rendering of the specification.
//! We do not aim to support rich display configurations, such as terminal wrapping, colour output, etc.
//!
//! # Usage
//! This page includes a demo on using `argbind`.
//! More demos are outlined in [the source](https://github.com/argbind/argbind/tree/main/demos).
//!
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ greeter -h
//! usage: greeter [--help] --name NAME [--tone TONE] [--repeat REPEAT] [--loud]
//! options:
//!   -h, --help    Show this help message and exit.
//!   -n, --name    Who to greet.  type: String
//!   -t, --tone    How to greet.  type: {formal, casual}  default: casual
//!   -r, --repeat  type: u8  default: 1
//!   --loud
//!
//! $ greeter --name=Ada -r 2
//! Hey Ada!
//! Hey Ada!
//!
//! $ greeter --tone shouty -r 0 --colour
//! Option 'colour' does not exist.
//! Option 'name' is mandatory.
//! 'shouty' is not one of {formal, casual}.
//! Value '0' of option 'repeat' does not match the pattern '[1-9]'.
//! ```
//!
//! # Derive Api
//! We highly recommend using the [derive Api](./derive/index.html) to declare your option contract.
//! The next section explains the structure and semantics of `argbind` using the builder Api, which applies to both builder and derive Apis.
//!
//! # Builder Api
//! Declare a [`Contract`] by adding [`Accessor`]s.
//! Each accessor has a name, a [`DeclaredType`], and a [`Marker`]:
//! * [`Marker::Option`] declares an option, configured via [`OptionMarker`].
//! Its arity is inferred from the declared type: `bool` is a flag, sequences take multiple values (one per occurrence), and everything else takes a single value.
//! * [`Marker::Unparsed`] declares the collector of every value not consumed by an option.
//! * [`Marker::Presence`] declares a boolean query of whether another option appeared.
//!
//! An accessor without a marker is excluded from the specification.
//! So is an accessor that declares parameters ([`Accessor::parameter`]), unless the [`SpecificationBuilder`] is strict, in which case it is malformed.
//!
//! The declared types come from [`Bindable`](./prelude/trait.Bindable.html), which covers `T`, `Vec<T>`, `Option<T>` and `Option<Vec<T>>` for every [`Scalar`](./prelude/trait.Scalar.html) `T`.
//!
//! The [`SpecificationBuilder`] turns the contract into a [`Specification`], rejecting inconsistent contracts with [`MalformedSpecification`].
//! [`Specification::parse`] then produces the [`BoundValues`] or the [`ValidationErrors`].
//! Finally, [`OptionContract::construct`](./prelude/trait.OptionContract.html#tymethod.construct) builds the live object.
//! ```no_run
#![doc = include_str!("../demos/table_contract.rs")]
//! ```
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for excluded accessors, ignored values, and failure counts.
//! * `unit_test`: expose [`BoundValues::test_values`], for testing hand-written `construct` implementations.
pub mod derive;
pub use argbind_builder::*;
