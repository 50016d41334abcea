mod core;
mod model;
mod scanner;

pub(crate) use self::core::*;
pub(crate) use model::*;
pub(crate) use scanner::*;
