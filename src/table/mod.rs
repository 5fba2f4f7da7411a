pub mod builder;
pub mod model;
pub mod persist;
pub mod range;
