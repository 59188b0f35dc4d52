use crate::core::errors::{PlatformError, Result};
use crate::core::models::credential::{Credential, Credentials};

/// Picks the credential to use for a relationship.
pub struct CredentialSelector;

impl CredentialSelector {
    /// The first instance of `relationship`.
    ///
    /// Only index 0 is used. Other instances are reachable through the
    /// full relationships mapping.
    ///
    /// # Errors
    ///
    /// `RelationshipNotFound` if the relationship is not defined or has
    /// no instances.
    pub fn select<'a>(credentials: &'a Credentials, relationship: &str) -> Result<&'a Credential> {
        credentials
            .get(relationship)
            .and_then(|instances| instances.first())
            .ok_or_else(|| PlatformError::RelationshipNotFound {
                name: relationship.to_string(),
            })
    }
}
