pub mod credential;
pub mod env_list;
mod nullable;
pub mod route;
