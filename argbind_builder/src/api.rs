mod capture;
mod contract;
mod core;
mod field;

pub use self::core::*;
pub use capture::*;
pub use contract::*;
