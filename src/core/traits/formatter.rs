use crate::core::errors::Result;
use crate::core::models::credential::Credential;

/// Port for turning a decoded credential into a client-library
/// connection string.
///
/// Implementations live in `adapters::formatters`. They only interpolate
/// credential fields; no decoding or validation happens here.
pub trait CredentialFormatter: Send + Sync {
    /// Render the connection string for `credential`.
    fn format(&self, credential: &Credential) -> Result<String>;

    /// Short name used to select this formatter (e.g. "libpq").
    fn name(&self) -> &str;
}
