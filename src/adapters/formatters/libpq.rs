use crate::core::errors::Result;
use crate::core::models::credential::Credential;
use crate::core::traits::formatter::CredentialFormatter;

/// PostgreSQL keyword/value connection string.
pub struct LibpqFormatter;

impl CredentialFormatter for LibpqFormatter {
    fn format(&self, c: &Credential) -> Result<String> {
        Ok(format!(
            "host={} port={} user={} password={} dbname={} sslmode=disable",
            c.host, c.port, c.username, c.password, c.path
        ))
    }

    fn name(&self) -> &str {
        "libpq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::formatters::fixture;

    #[test]
    fn formats_keyword_string() {
        let cred = fixture::credential("pgsql", "main", 5432);

        assert_eq!(
            LibpqFormatter.format(&cred).unwrap(),
            "host=service.internal port=5432 user=user password=pass dbname=main sslmode=disable"
        );
    }

    #[test]
    fn formats_postgresql_relationship() {
        let cred = fixture::relationship("postgresql");

        assert_eq!(
            LibpqFormatter.format(&cred).unwrap(),
            "host=postgresql.internal port=5432 user=main password=main dbname=main sslmode=disable"
        );
    }
}
