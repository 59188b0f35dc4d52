pub mod env_reader;
pub mod formatter;
