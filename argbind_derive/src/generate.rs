mod contract;
mod symbolic;
