use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::nullable::nullable;

/// Route type forwarding traffic to an application.
pub const UPSTREAM: &str = "upstream";

/// Route type answering with a redirect.
pub const REDIRECT: &str = "redirect";

/// HTTP Strict Transport Security settings of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrictTransportSecurity {
    #[serde(deserialize_with = "nullable")]
    pub include_subdomains: bool,
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub preload: bool,
}

/// TLS policy of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTls {
    #[serde(deserialize_with = "nullable")]
    pub client_authentication: String,
    /// Sent either as a protocol name or a number depending on the
    /// platform version, so it is kept as raw JSON.
    pub min_version: serde_json::Value,
    #[serde(deserialize_with = "nullable")]
    pub client_certificate_authorities: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub strict_transport_security: StrictTransportSecurity,
}

/// HTTP cache policy of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteCache {
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub headers: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub cookies: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub default_ttl: u64,
}

/// One allow/deny rule of a route's access control.
///
/// Accepted either as a `{permission, address}` object or as a bare
/// address string, which leaves `permission` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AccessEntry")]
pub struct AccessAddress {
    pub permission: String,
    pub address: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccessEntry {
    Address(String),
    Rule {
        #[serde(default, deserialize_with = "nullable")]
        permission: String,
        #[serde(default, deserialize_with = "nullable")]
        address: String,
    },
}

impl From<AccessEntry> for AccessAddress {
    fn from(entry: AccessEntry) -> Self {
        match entry {
            AccessEntry::Address(address) => Self {
                permission: String::new(),
                address,
            },
            AccessEntry::Rule { permission, address } => Self {
                permission,
                address,
            },
        }
    }
}

/// HTTP access control of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpAccess {
    #[serde(deserialize_with = "nullable")]
    pub addresses: Vec<AccessAddress>,
    #[serde(deserialize_with = "nullable")]
    pub basic_auth: HashMap<String, String>,
}

/// Server side includes settings of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSsi {
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
}

/// One entry of the routing table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    #[serde(deserialize_with = "nullable")]
    pub original_url: String,
    #[serde(deserialize_with = "nullable")]
    pub attributes: HashMap<String, String>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub route_type: String,
    #[serde(deserialize_with = "nullable")]
    pub restrict_robots: bool,
    #[serde(deserialize_with = "nullable")]
    pub tls: RouteTls,
    /// `app:http` style identifier of the target application.
    #[serde(deserialize_with = "nullable")]
    pub upstream: String,
    /// Redirect target, only set on redirect routes.
    #[serde(deserialize_with = "nullable")]
    pub to: String,
    #[serde(deserialize_with = "nullable")]
    pub cache: RouteCache,
    #[serde(deserialize_with = "nullable")]
    pub http_access: HttpAccess,
    #[serde(deserialize_with = "nullable")]
    pub primary: bool,
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub ssi: RouteSsi,

    /// The key this route is stored under. Not part of the payload;
    /// filled in right after decoding.
    #[serde(skip_deserializing)]
    pub url: String,
}

impl Route {
    pub fn is_upstream(&self) -> bool {
        self.route_type == UPSTREAM
    }

    pub fn is_redirect(&self) -> bool {
        self.route_type == REDIRECT
    }

    /// Application name part of the upstream identifier.
    ///
    /// `app:http` yields `app`; an identifier without `:` is returned whole.
    pub fn upstream_app(&self) -> &str {
        match self.upstream.split_once(':') {
            Some((app, _)) => app,
            None => &self.upstream,
        }
    }
}

/// Literal URL to route. Ordered by URL so lookups that scan for the
/// first match are deterministic.
pub type Routes = BTreeMap<String, Route>;
