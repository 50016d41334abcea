mod base;
mod coercer;
mod validation;
mod values;

pub(crate) use coercer::*;
pub use validation::*;
pub use values::*;
