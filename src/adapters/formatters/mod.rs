pub mod amqp;
pub mod libpq;
pub mod memcache;
pub mod mongo;
pub mod solr;
pub mod sql_dsn;

use crate::core::traits::formatter::CredentialFormatter;

/// Names accepted by [`formatter_for`].
pub const FORMATTER_NAMES: &[&str] = &["sql-dsn", "libpq", "amqp", "mongo", "memcache", "solr"];

/// Look up a formatter by its name.
pub fn formatter_for(name: &str) -> Option<Box<dyn CredentialFormatter>> {
    match name {
        "sql-dsn" => Some(Box::new(sql_dsn::SqlDsnFormatter)),
        "libpq" => Some(Box::new(libpq::LibpqFormatter)),
        "amqp" => Some(Box::new(amqp::AmqpFormatter)),
        "mongo" => Some(Box::new(mongo::MongoFormatter)),
        "memcache" => Some(Box::new(memcache::MemcacheFormatter)),
        "solr" => Some(Box::new(solr::SolrFormatter)),
        _ => None,
    }
}
