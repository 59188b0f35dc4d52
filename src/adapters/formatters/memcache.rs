use crate::core::errors::Result;
use crate::core::models::credential::Credential;
use crate::core::traits::formatter::CredentialFormatter;

/// Bare `host:port` server address.
pub struct MemcacheFormatter;

impl CredentialFormatter for MemcacheFormatter {
    fn format(&self, c: &Credential) -> Result<String> {
        Ok(format!("{}:{}", c.host, c.port))
    }

    fn name(&self) -> &str {
        "memcache"
    }
}
