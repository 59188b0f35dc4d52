pub mod build_config;
pub mod credential_selector;
pub mod decoder;
pub mod route_table;
pub mod runtime_config;
