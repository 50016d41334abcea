//! Traits which, typically, may be imported without concern: `use argbind::prelude::*`.

pub use crate::api::{Bindable, OptionContract, Scalar};

/// Behaviour for an enumerated type whose variants are matched by symbol (case sensitive).
// Needs to be imported in order to implement a custom `Symbolic`; usually derived.
pub trait Symbolic: Sized + 'static {
    /// The declared symbols, in declaration order.
    const SYMBOLS: &'static [&'static str];

    /// The variant for the symbol, if any.
    fn from_symbol(symbol: &str) -> Option<Self>;

    /// The symbol for this variant.
    fn symbol(&self) -> &'static str;
}
