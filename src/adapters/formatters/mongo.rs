use crate::core::errors::Result;
use crate::core::models::credential::Credential;
use crate::core::traits::formatter::CredentialFormatter;

/// MongoDB connection URI.
pub struct MongoFormatter;

impl CredentialFormatter for MongoFormatter {
    fn format(&self, c: &Credential) -> Result<String> {
        Ok(format!(
            "{}://{}:{}@{}:{}/{}",
            c.scheme, c.username, c.password, c.host, c.port, c.path
        ))
    }

    fn name(&self) -> &str {
        "mongo"
    }
}
