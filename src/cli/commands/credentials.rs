use crate::cli::output;
use platform_config::adapters::formatters::{FORMATTER_NAMES, formatter_for};
use platform_config::config::app_config::AppConfig;
use platform_config::{Credential, PlatformError, Result};

/// Execute the `platform-config credentials <relationship>` command.
///
/// Prints the first instance of the relationship, or its connection
/// string when `format` names a formatter.
pub fn execute(
    config: &AppConfig,
    relationship: &str,
    format: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let runtime = super::load_runtime(config)?;
    let credential = runtime.credentials(relationship)?;

    if let Some(name) = format {
        let formatter = formatter_for(name).ok_or_else(|| PlatformError::UnknownFormatter {
            name: name.to_string(),
            available: FORMATTER_NAMES.join(", "),
        })?;
        let formatted = formatter.format(credential)?;
        println!("{formatted}");
        return Ok(());
    }

    if as_json {
        return output::json(credential);
    }

    print_credential(relationship, credential);
    Ok(())
}

fn print_credential(relationship: &str, c: &Credential) {
    output::header(&format!("Relationship: {relationship}"));
    output::field("Scheme", &c.scheme);
    output::field("Type", &c.service_type);
    output::field("Service", &c.service);
    output::field("Host", &c.host);
    output::field("Port", &c.port.to_string());
    output::field("Username", &c.username);
    output::field("Password", if c.password.is_empty() { "" } else { "********" });
    output::field("Path", &c.path);
    output::field("Hostname", &c.hostname);
    if c.query.is_master {
        output::success("Primary instance");
    }
}
