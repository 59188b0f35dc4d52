use crate::core::errors::{PlatformError, Result};
use crate::core::models::credential::Credential;
use crate::core::traits::formatter::CredentialFormatter;

/// Solr clients want the core URL and the collection separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolrCredentials {
    /// Base URL, ending with `/`.
    pub url: String,
    pub collection: String,
}

pub struct SolrFormatter;

impl SolrFormatter {
    /// Split the credential path (`solr/collection`) into URL and collection.
    ///
    /// # Errors
    ///
    /// `FormatFailed` if the path has no `/` separating the collection.
    pub fn credentials(&self, c: &Credential) -> Result<SolrCredentials> {
        let Some((core, collection)) = c.path.split_once('/') else {
            return Err(PlatformError::FormatFailed {
                formatter: self.name().to_string(),
                reason: format!("path '{}' has no collection segment", c.path),
            });
        };

        Ok(SolrCredentials {
            url: format!("http://{}:{}/{}/", c.host, c.port, core),
            collection: collection.to_string(),
        })
    }
}

impl CredentialFormatter for SolrFormatter {
    fn format(&self, c: &Credential) -> Result<String> {
        let solr = self.credentials(c)?;
        Ok(format!("{}{}", solr.url, solr.collection))
    }

    fn name(&self) -> &str {
        "solr"
    }
}
