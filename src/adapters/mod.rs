pub mod env;
pub mod formatters;
