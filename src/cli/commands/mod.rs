pub mod build;
pub mod credentials;
pub mod route;
pub mod routes;
pub mod runtime;
pub mod variable;

use platform_config::config::app_config::AppConfig;
use platform_config::{BuildConfig, PlatformError, Result, RuntimeConfig};

/// Read the build configuration from the configured environment.
fn load_build(config: &AppConfig) -> Result<BuildConfig> {
    let reader = config.reader()?;
    BuildConfig::new(&*reader, &config.prefix)
}

/// Read the runtime configuration from the configured environment.
fn load_runtime(config: &AppConfig) -> Result<RuntimeConfig> {
    let reader = config.reader()?;
    RuntimeConfig::new(&*reader, &config.prefix)
}

/// The most complete build view available: the runtime one when
/// deployed (its variables replace the build-time ones), else the build one.
fn load_best_build(config: &AppConfig) -> Result<BuildConfig> {
    let reader = config.reader()?;
    match RuntimeConfig::new(&*reader, &config.prefix) {
        Ok(runtime) => Ok(runtime.build().clone()),
        Err(PlatformError::NotRuntimePlatform { .. }) => {
            BuildConfig::new(&*reader, &config.prefix)
        }
        Err(e) => Err(e),
    }
}
