pub mod axis;
pub mod resolver;
