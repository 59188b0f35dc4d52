use crate::core::errors::Result;
use crate::core::models::credential::Credential;
use crate::core::traits::formatter::CredentialFormatter;

/// `user:pass@tcp(host:port)/db` DSN, as used by most Go-style SQL drivers.
pub struct SqlDsnFormatter;

impl CredentialFormatter for SqlDsnFormatter {
    fn format(&self, c: &Credential) -> Result<String> {
        Ok(format!(
            "{}:{}@tcp({}:{})/{}?charset=utf8",
            c.username, c.password, c.host, c.port, c.path
        ))
    }

    fn name(&self) -> &str {
        "sql-dsn"
    }
}
