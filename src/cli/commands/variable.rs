use serde_json::json;

use crate::cli::output;
use platform_config::config::app_config::AppConfig;
use platform_config::{PlatformError, Result};

/// Execute the `platform-config variable <name>` command.
///
/// Falls back to `default` when given; a missing variable without a
/// default is an error.
pub fn execute(config: &AppConfig, name: &str, default: Option<&str>, as_json: bool) -> Result<()> {
    let build = super::load_best_build(config)?;

    let value = match (build.variables().get(name), default) {
        (Some(value), _) => value.as_str(),
        (None, Some(default)) => default,
        (None, None) => {
            return Err(PlatformError::VariableNotFound {
                name: name.to_string(),
            });
        }
    };

    if as_json {
        return output::json(&json!({ "name": name, "value": value }));
    }

    println!("{value}");
    Ok(())
}
