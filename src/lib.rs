//! Typed access to the deployment metadata a hosting platform injects
//! into the process environment.
//!
//! Build-time values (application name, tree id, variables, application
//! definition) are exposed by [`BuildConfig`]; runtime values (branch,
//! relationships, routes, listen address) by [`RuntimeConfig`]. Both are
//! read through an [`EnvReader`], so tests and embedders can supply their
//! own environment.
//!
//! ```no_run
//! match platform_config::runtime_config() {
//!     Ok(config) => {
//!         let db = config.credentials("database")?;
//!         println!("database at {}:{}", db.host, db.port);
//!     }
//!     Err(_) => println!("not on the platform, using local settings"),
//! }
//! # Ok::<(), platform_config::PlatformError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod core;

#[cfg(test)]
mod testdata;

pub use crate::adapters::env::map_env::MapEnv;
pub use crate::adapters::env::process_env::ProcessEnv;
pub use crate::core::errors::{DecodeStage, PlatformError, Result};
pub use crate::core::models::credential::{Credential, Credentials};
pub use crate::core::models::env_list::EnvList;
pub use crate::core::models::route::{Route, Routes};
pub use crate::core::services::build_config::{BuildConfig, DEFAULT_PREFIX};
pub use crate::core::services::runtime_config::RuntimeConfig;
pub use crate::core::traits::env_reader::EnvReader;
pub use crate::core::traits::formatter::CredentialFormatter;

/// Build-time configuration from the process environment.
pub fn build_config() -> Result<BuildConfig> {
    BuildConfig::new(&ProcessEnv, DEFAULT_PREFIX)
}

/// Runtime configuration from the process environment.
pub fn runtime_config() -> Result<RuntimeConfig> {
    RuntimeConfig::new(&ProcessEnv, DEFAULT_PREFIX)
}
