mod attribute;
mod contract;
mod field;
mod symbolic;
