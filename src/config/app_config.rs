use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::adapters::env::dotenv_env::DotenvEnv;
use crate::adapters::env::process_env::ProcessEnv;
use crate::core::errors::{PlatformError, Result};
use crate::core::services::build_config::DEFAULT_PREFIX;
use crate::core::traits::env_reader::EnvReader;

static PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("prefix pattern is a valid regex")
});

/// Where and how the platform environment is read.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub prefix: String,
    /// Dotenv file replacing the process environment, if any.
    pub env_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            env_file: None,
        }
    }
}

impl AppConfig {
    /// Build and validate the settings.
    ///
    /// # Errors
    ///
    /// `InvalidPrefix` if the prefix is empty or contains characters that
    /// cannot appear in a variable name.
    pub fn new(prefix: &str, env_file: Option<&Path>) -> Result<Self> {
        validate_prefix(prefix)?;

        Ok(Self {
            prefix: prefix.to_string(),
            env_file: env_file.map(Path::to_path_buf),
        })
    }

    /// The environment to read from: the env file when configured,
    /// otherwise the process environment.
    pub fn reader(&self) -> Result<Box<dyn EnvReader>> {
        match &self.env_file {
            Some(path) => Ok(Box::new(DotenvEnv::load(path)?)),
            None => Ok(Box::new(ProcessEnv)),
        }
    }
}

/// Check that `prefix` can start a variable name.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(PlatformError::InvalidPrefix {
            prefix: String::new(),
            reason: "prefix must not be empty".into(),
        });
    }

    if !PREFIX_PATTERN.is_match(prefix) {
        return Err(PlatformError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: "only letters, digits and underscores are allowed".into(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn default_uses_platform_prefix() {
        let config = AppConfig::default();

        assert_eq!(config.prefix, "PLATFORM_");
        assert!(config.env_file.is_none());
    }

    #[test]
    fn valid_prefixes_are_accepted() {
        assert!(validate_prefix("PLATFORM_").is_ok());
        assert!(validate_prefix("_X1").is_ok());
    }

    #[test]
    fn invalid_prefixes_are_rejected() {
        assert!(matches!(
            validate_prefix(""),
            Err(PlatformError::InvalidPrefix { .. })
        ));
        assert!(validate_prefix("1PLATFORM_").is_err());
        assert!(validate_prefix("PLAT-FORM_").is_err());
        assert!(validate_prefix("PLATFORM _").is_err());
    }

    #[test]
    fn reader_uses_env_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("platform.env");
        file.write_str("PLATFORM_APPLICATION_NAME=from-file\n").unwrap();

        let config = AppConfig::new("PLATFORM_", Some(file.path())).unwrap();
        let reader = config.reader().unwrap();

        assert_eq!(reader.get("PLATFORM_APPLICATION_NAME"), "from-file");
    }

    #[test]
    fn reader_reports_missing_env_file() {
        let dir = assert_fs::TempDir::new().unwrap();
        let missing = dir.child("absent.env");

        let config = AppConfig::new("PLATFORM_", Some(missing.path())).unwrap();

        assert!(matches!(config.reader(), Err(PlatformError::Io(_))));
    }

    #[test]
    fn prefix_pattern_is_reused_across_calls() {
        for _ in 0..3 {
            assert!(validate_prefix("PLATFORM_").is_ok());
            assert!(validate_prefix("PLAT-FORM_").is_err());
        }
    }
}
