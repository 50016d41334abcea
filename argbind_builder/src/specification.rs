mod builder;
mod model;

pub use builder::*;
pub use model::*;
