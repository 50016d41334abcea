//! Derive Api for `argbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with an options struct `S` instrumented with `#[derive(OptionContract)]`.
//! This generates the [`OptionContract`](../prelude/trait.OptionContract.html) implementation for `S`, so that `S::parse_env()` binds the Cli arguments onto `S`.
//! The specification of `S` is derived once, on first use, and cached for the lifetime of the program.
//!
//! This page includes a demo on using the derive Api.
//! More demos are outlined in [the source](https://github.com/argbind/argbind/tree/main/demos).
//!
//! ```no_run
#![doc = include_str!("../demos/copier.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ copier --destination out -x '*.log' a.txt b.log
//! copy a.txt -> out
//! Copied 1 file(s).
//!
//! $ copier -x '*.log' -x '*.tmp' -x 'logs' a.txt
//! Option 'destination' is mandatory.
//! Value 'logs' of option 'exclude' does not match the pattern '\*\.[a-z]+'.
//! ```
//!
//! ### Field Configuration
//! Each field is marked with exactly one of the following (fields without an `argbind` attribute are excluded from the Cli, and are initialized via `Default::default()`).
//! * `#[argbind(option)]` to declare an option.
//! The arity is inferred from the field type: `bool` is a flag, `Vec<T>` takes multiple values, and everything else takes a single value.
//! An option is required, unless it is a flag, declares a default, is typed `Option<T>`, is marked `optional`, or is the target of a presence accessor.
//! A single-value option that is marked `optional` (or targeted by a presence accessor) without a default must be typed `Option<T>`, since it may be absent.
//! * `#[argbind(unparsed)]` to collect the values not consumed by any option (including everything after `--`).
//! The field must be a sequence, and at most one field may be marked unparsed.
//! * `#[argbind(present = "field")]` to report whether the option `field` appeared on the Cli.
//! The field must be `bool`.
//!
//! The option fields accept the following additional attributes, which may be combined as necessary.
//! * `#[argbind(long = "name")]` to override the long name (defaults to the field name, with `_` replaced by `-`).
//! * `#[argbind(short = C)]` to declare the short name, where `C` is a char value (ex: `'c'`).
//! * `#[argbind(default = "value")]` to declare a default, given in its Cli form.
//! Repeat the attribute to declare a default sequence.
//! * `#[argbind(optional)]` to make the option optional without a default.
//! * `#[argbind(help)]` to make the flag a help request.
//! A help request overrides every other failure with the usage summary.
//! * `#[argbind(description = "..")]` to describe the option in the usage summary.
//! * `#[argbind(pattern = "..")]` to require each value to (entirely) match the regular expression.
//! * `#[argbind(exactly = N)]`, or `#[argbind(minimum = N)]` and/or `#[argbind(maximum = N)]`, to constrain the number of values of a `Vec<T>` option.
//!
//! The unparsed field accepts `default` and `description`.
//!
//! The struct accepts `#[argbind(program = "name")]` to set the program name in the usage summary (defaults to the crate name).
//!
//! ### Symbolic Configuration
//! Use `#[derive(Symbolic)]` on a unit-only enum to make it an option type.
//! Each variant is matched (case sensitive) by its symbol, which defaults to the variant name.
//!
//! For example:
//! ```ignore
//! #[derive(Symbolic)]
//! enum Tone {
//!     Formal,
//!     // the above matches the value "Formal"
//!
//!     #[argbind(symbol = "casual")]
//!     Casual,
//!     // the above matches the value "casual"
//! }
//! ```

pub use argbind_derive::*;
