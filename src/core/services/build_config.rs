use serde_json::{Map, Value};

use crate::core::errors::{PlatformError, Result};
use crate::core::models::env_list::EnvList;
use crate::core::services::decoder::Decoder;
use crate::core::traits::env_reader::EnvReader;

/// Prefix the platform puts in front of its variables.
pub const DEFAULT_PREFIX: &str = "PLATFORM_";

/// Build-time view of the platform environment.
///
/// Everything is copied out of the reader at construction; the config
/// holds no reference to the environment afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub(crate) application_name: String,
    pub(crate) tree_id: String,
    pub(crate) app_dir: String,
    pub(crate) project: String,
    pub(crate) project_entropy: String,

    pub(crate) variables: EnvList,
    pub(crate) application: Map<String, Value>,

    pub(crate) prefix: String,
}

impl BuildConfig {
    /// Read the build-time configuration from `env`.
    ///
    /// # Errors
    ///
    /// - `InvalidPrefix` if `prefix` is empty.
    /// - `NotValidPlatform` if `{prefix}APPLICATION_NAME` is empty. Nothing
    ///   else is read in that case.
    /// - `Decode` if `{prefix}VARIABLES` or `{prefix}APPLICATION` is set
    ///   but malformed.
    pub fn new<E: EnvReader + ?Sized>(env: &E, prefix: &str) -> Result<Self> {
        if prefix.is_empty() {
            return Err(PlatformError::InvalidPrefix {
                prefix: String::new(),
                reason: "prefix must not be empty".into(),
            });
        }

        let marker = format!("{prefix}APPLICATION_NAME");
        let application_name = env.get(&marker);
        if application_name.is_empty() {
            tracing::debug!(variable = %marker, "build marker missing");
            return Err(PlatformError::NotValidPlatform { variable: marker });
        }

        let var = |name: &str| env.get(&format!("{prefix}{name}"));

        let variables = Decoder::read(env, &format!("{prefix}VARIABLES"))?.unwrap_or_default();
        let application =
            Decoder::read(env, &format!("{prefix}APPLICATION"))?.unwrap_or_default();

        let config = Self {
            application_name,
            tree_id: var("TREE_ID"),
            app_dir: var("APP_DIR"),
            project: var("PROJECT"),
            project_entropy: var("PROJECT_ENTROPY"),
            variables,
            application,
            prefix: prefix.to_string(),
        };

        tracing::debug!(
            prefix,
            application = %config.application_name,
            variables = config.variables.len(),
            "build environment loaded"
        );

        Ok(config)
    }

    /// The name of the application, as defined in its configuration.
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Hash of the application's files before the build.
    pub fn tree_id(&self) -> &str {
        &self.tree_id
    }

    /// Absolute path to the application.
    pub fn app_dir(&self) -> &str {
        &self.app_dir
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// A random string generated for each project, useful for hash keys.
    pub fn project_entropy(&self) -> &str {
        &self.project_entropy
    }

    /// Prefix every lookup was made with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// A single entry of the variables mapping, or `default` if unset.
    ///
    /// Variables prefixed with `env:` are also exposed as plain environment
    /// variables; here they are only found under their full `env:` name.
    pub fn variable<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.variables.get(name).map_or(default, String::as_str)
    }

    /// The full variables mapping. Empty when none were provided.
    pub fn variables(&self) -> &EnvList {
        &self.variables
    }

    /// The application definition, as arbitrary JSON.
    pub fn application(&self) -> &Map<String, Value> {
        &self.application
    }
}
