use crate::core::errors::Result;
use crate::core::models::credential::Credential;
use crate::core::traits::formatter::CredentialFormatter;

/// AMQP URL for message queues.
pub struct AmqpFormatter;

impl CredentialFormatter for AmqpFormatter {
    fn format(&self, c: &Credential) -> Result<String> {
        Ok(format!(
            "{}://{}:{}@{}:{}/",
            c.scheme, c.username, c.password, c.host, c.port
        ))
    }

    fn name(&self) -> &str {
        "amqp"
    }
}
