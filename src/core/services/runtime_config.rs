use std::ops::Deref;

use crate::core::errors::{PlatformError, Result};
use crate::core::models::credential::{Credential, Credentials};
use crate::core::models::route::{Route, Routes};
use crate::core::services::build_config::BuildConfig;
use crate::core::services::credential_selector::CredentialSelector;
use crate::core::services::decoder::Decoder;
use crate::core::services::route_table::RouteTable;
use crate::core::traits::env_reader::EnvReader;

const ENTERPRISE_MODE: &str = "enterprise";
const ENTERPRISE_PRODUCTION_BRANCH: &str = "production";
const PRODUCTION_BRANCH: &str = "master";

/// Runtime view of the platform environment.
///
/// Extends [`BuildConfig`]; every build accessor is available through
/// deref. Like the build config it is an owned snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    build: BuildConfig,

    branch: String,
    environment: String,
    document_root: String,
    smtp_host: String,
    mode: String,

    credentials: Credentials,
    routes: Routes,

    socket: String,
    port: String,
}

impl RuntimeConfig {
    /// Read the runtime configuration from `env`.
    ///
    /// # Errors
    ///
    /// - Any error of [`BuildConfig::new`], unchanged.
    /// - `NotRuntimePlatform` if `{prefix}BRANCH` is empty.
    /// - `Decode` if `{prefix}RELATIONSHIPS`, `{prefix}VARIABLES` or
    ///   `{prefix}ROUTES` is set but malformed.
    pub fn new<E: EnvReader + ?Sized>(env: &E, prefix: &str) -> Result<Self> {
        let mut build = BuildConfig::new(env, prefix)?;

        let marker = format!("{prefix}BRANCH");
        let branch = env.get(&marker);
        if branch.is_empty() {
            tracing::debug!(variable = %marker, "runtime marker missing");
            return Err(PlatformError::NotRuntimePlatform { variable: marker });
        }

        let var = |name: &str| env.get(&format!("{prefix}{name}"));

        build.project = var("PROJECT");

        let credentials: Credentials =
            Decoder::read(env, &format!("{prefix}RELATIONSHIPS"))?.unwrap_or_default();

        if let Some(variables) = Decoder::read(env, &format!("{prefix}VARIABLES"))? {
            build.variables = variables;
        }

        let mut routes: Routes =
            Decoder::read(env, &format!("{prefix}ROUTES"))?.unwrap_or_default();
        RouteTable::normalize(&mut routes);

        let config = Self {
            branch,
            environment: var("ENVIRONMENT"),
            document_root: var("DOCUMENT_ROOT"),
            smtp_host: var("SMTP_HOST"),
            mode: var("MODE"),
            credentials,
            routes,
            socket: env.get("SOCKET"),
            port: env.get("PORT"),
            build,
        };

        tracing::debug!(
            branch = %config.branch,
            relationships = config.credentials.len(),
            routes = config.routes.len(),
            "runtime environment loaded"
        );

        Ok(config)
    }

    /// The build-time part of this configuration.
    pub fn build(&self) -> &BuildConfig {
        &self.build
    }

    /// Whether this is an enterprise environment.
    pub fn on_enterprise(&self) -> bool {
        self.mode == ENTERPRISE_MODE
    }

    /// Dedicated is the newer name of the enterprise tier.
    pub fn on_dedicated(&self) -> bool {
        self.on_enterprise()
    }

    /// Whether this looks like the production environment.
    ///
    /// Compares the branch against the conventional production branch of
    /// the tier. Projects using another branch name need their own check.
    pub fn on_production(&self) -> bool {
        let production = if self.on_enterprise() {
            ENTERPRISE_PRODUCTION_BRANCH
        } else {
            PRODUCTION_BRANCH
        };

        self.branch == production
    }

    /// The Git branch name.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// The environment id (usually the branch plus a hash).
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Absolute path to the web root of the application.
    pub fn document_root(&self) -> &str {
        &self.document_root
    }

    /// Host of the outgoing SMTP server; empty when email is disabled.
    pub fn smtp_host(&self) -> &str {
        &self.smtp_host
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Unix socket to listen on for incoming requests.
    pub fn socket(&self) -> &str {
        &self.socket
    }

    /// TCP port to listen on for incoming requests.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Credentials of the first instance of `relationship`.
    ///
    /// # Errors
    ///
    /// `RelationshipNotFound` if the relationship does not exist.
    pub fn credentials(&self, relationship: &str) -> Result<&Credential> {
        CredentialSelector::select(&self.credentials, relationship)
    }

    /// Every relationship with all of its instances.
    pub fn relationships(&self) -> &Credentials {
        &self.credentials
    }

    pub fn has_relationship(&self, relationship: &str) -> bool {
        self.credentials.contains_key(relationship)
    }

    /// The whole routing table, keyed by URL.
    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// A route by its id.
    ///
    /// Routes declared without an id cannot be looked up this way.
    pub fn route(&self, id: &str) -> Option<&Route> {
        RouteTable::by_id(&self.routes, id)
    }

    pub fn primary_route(&self) -> Option<&Route> {
        RouteTable::primary(&self.routes)
    }

    pub fn upstream_routes(&self) -> Routes {
        RouteTable::upstream(&self.routes)
    }

    pub fn upstream_routes_for_app(&self, app: &str) -> Routes {
        RouteTable::upstream_for_app(&self.routes, app)
    }
}

impl Deref for RuntimeConfig {
    type Target = BuildConfig;

    fn deref(&self) -> &BuildConfig {
        &self.build
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::env::map_env::MapEnv;
    use crate::core::errors::DecodeStage;
    use crate::core::services::build_config::DEFAULT_PREFIX;
    use crate::testdata;

    fn runtime(overrides: &[(&str, &str)]) -> RuntimeConfig {
        let mut env = testdata::runtime_env();
        for (k, v) in overrides {
            env = env.with(*k, *v);
        }
        RuntimeConfig::new(&env, DEFAULT_PREFIX).unwrap()
    }

    #[test]
    fn missing_application_name_fails_before_runtime_checks() {
        let env = MapEnv::new().with("PLATFORM_BRANCH", "master");

        let result = RuntimeConfig::new(&env, DEFAULT_PREFIX);

        assert!(matches!(result, Err(PlatformError::NotValidPlatform { .. })));
    }

    #[test]
    fn runtime_config_in_build_environment_fails() {
        let result = RuntimeConfig::new(&testdata::build_env(), DEFAULT_PREFIX);

        assert!(matches!(result, Err(PlatformError::NotRuntimePlatform { .. })));
    }

    #[test]
    fn build_and_runtime_properties_are_read() {
        let config = runtime(&[]);

        assert_eq!(config.app_dir(), "/app");
        assert_eq!(config.application_name(), "app");
        assert_eq!(config.project(), "test-project");
        assert_eq!(config.tree_id(), "abc123");
        assert_eq!(config.project_entropy(), "def789");

        assert_eq!(config.branch(), "feature-x");
        assert_eq!(config.environment(), "feature-x-hgi456");
        assert_eq!(config.document_root(), "/app/web");
        assert_eq!(config.smtp_host(), "1.2.3.4");
        assert_eq!(config.port(), "8080");
        assert_eq!(config.socket(), "unix://tmp/blah.sock");
    }

    #[test]
    fn on_enterprise_true_on_enterprise() {
        assert!(runtime(&[("PLATFORM_MODE", "enterprise")]).on_enterprise());
        assert!(runtime(&[("PLATFORM_MODE", "enterprise")]).on_dedicated());
    }

    #[test]
    fn on_enterprise_false_on_standard() {
        assert!(!runtime(&[]).on_enterprise());
    }

    #[test]
    fn on_production_on_enterprise() {
        let prod = runtime(&[("PLATFORM_MODE", "enterprise"), ("PLATFORM_BRANCH", "production")]);
        let staging = runtime(&[("PLATFORM_MODE", "enterprise"), ("PLATFORM_BRANCH", "staging")]);
        let master = runtime(&[("PLATFORM_MODE", "enterprise"), ("PLATFORM_BRANCH", "master")]);

        assert!(prod.on_production());
        assert!(!staging.on_production());
        assert!(!master.on_production());
    }

    #[test]
    fn on_production_on_standard() {
        assert!(runtime(&[("PLATFORM_BRANCH", "master")]).on_production());
        assert!(!runtime(&[]).on_production());
    }

    #[test]
    fn minimal_environment_with_unset_mode() {
        let env = MapEnv::new()
            .with("PLATFORM_APPLICATION_NAME", "app")
            .with("PLATFORM_BRANCH", "master");

        let config = RuntimeConfig::new(&env, DEFAULT_PREFIX).unwrap();

        assert!(!config.on_enterprise());
        assert!(config.on_production());
    }

    #[test]
    fn empty_complex_variables_give_empty_collections() {
        let env = MapEnv::new()
            .with("PLATFORM_APPLICATION_NAME", "app")
            .with("PLATFORM_BRANCH", "master");

        let config = RuntimeConfig::new(&env, DEFAULT_PREFIX).unwrap();

        assert!(config.routes().is_empty());
        assert!(config.relationships().is_empty());
        assert!(config.variables().is_empty());
        assert!(config.route("main").is_none());
        assert!(config.primary_route().is_none());
        assert!(config.upstream_routes().is_empty());
        assert!(matches!(
            config.credentials("database"),
            Err(PlatformError::RelationshipNotFound { .. })
        ));
        assert_eq!(config.variable("x", "fallback"), "fallback");
    }

    #[test]
    fn credentials_for_existing_relationship() {
        let config = runtime(&[]);

        let creds = config.credentials("database").unwrap();

        assert_eq!(creds.scheme, "mysql");
        assert_eq!(creds.host, "database.internal");
        assert_eq!(creds.port, 3306);
        assert!(config.has_relationship("database"));
    }

    #[test]
    fn credentials_for_missing_relationship_fails() {
        let config = runtime(&[]);

        let err = config.credentials("does-not-exist").unwrap_err();

        assert!(err.to_string().contains("No such relationship: does-not-exist"));
    }

    #[test]
    fn relationships_expose_every_instance() {
        let config = runtime(&[]);

        assert_eq!(config.relationships()["redis"].len(), 2);
        assert_eq!(config.credentials("redis").unwrap().host, "redis.internal");
    }

    #[test]
    fn runtime_variables_replace_build_variables() {
        let env = testdata::runtime_env().with(
            "PLATFORM_VARIABLES",
            testdata::encode(r#"{"runtime-only": "yes"}"#),
        );

        let config = RuntimeConfig::new(&env, DEFAULT_PREFIX).unwrap();

        assert_eq!(config.variable("runtime-only", ""), "yes");
        assert_eq!(config.variable("somevar", "gone"), "gone");
    }

    #[test]
    fn variables_are_available_at_runtime() {
        let config = runtime(&[]);

        assert_eq!(config.variable("somevar", ""), "someval");
    }

    #[test]
    fn all_routes_are_exposed() {
        let config = runtime(&[]);

        let route = &config.routes()["https://www.master-7rqtwti-gcpjkefjk4wc2.us-2.platformsh.site/"];

        assert_eq!(route.route_type, "upstream");
    }

    #[test]
    fn routes_are_normalized() {
        let config = runtime(&[]);

        assert!(!config.routes().is_empty());
        for (url, route) in config.routes() {
            assert_eq!(&route.url, url);
        }
    }

    #[test]
    fn route_by_id() {
        let config = runtime(&[]);

        let route = config.route("main").unwrap();

        assert_eq!(route.route_type, "upstream");
        assert!(config.route("missing").is_none());
    }

    #[test]
    fn primary_route_is_found() {
        let config = runtime(&[]);

        let primary = config.primary_route().unwrap();

        assert!(primary.primary);
        assert_eq!(
            primary.url,
            "https://www.master-7rqtwti-gcpjkefjk4wc2.us-2.platformsh.site/"
        );
    }

    #[test]
    fn upstream_routes_filter_by_type_and_app() {
        let config = runtime(&[]);

        let upstream = config.upstream_routes();
        let for_app = config.upstream_routes_for_app("app");
        let for_api = config.upstream_routes_for_app("api");

        assert_eq!(upstream.len(), 3);
        assert!(upstream.len() < config.routes().len());
        assert_eq!(for_app.len(), 2);
        assert_eq!(for_api.len(), 1);
        assert!(config.upstream_routes_for_app("nope").is_empty());
    }

    #[test]
    fn malformed_routes_fail_construction() {
        let env = testdata::runtime_env().with("PLATFORM_ROUTES", testdata::encode("{\"x\": 1}"));

        let result = RuntimeConfig::new(&env, DEFAULT_PREFIX);

        assert!(matches!(
            result,
            Err(PlatformError::Decode {
                stage: DecodeStage::Json,
                ..
            })
        ));
    }

    #[test]
    fn routes_with_plain_access_addresses_decode() {
        let routes = r#"{
            "https://www.example.com/": {
                "type": "upstream",
                "upstream": "app:http",
                "http_access": {"addresses": ["10.0.0.0/8"], "basic_auth": {}}
            }
        }"#;
        let env = testdata::runtime_env().with("PLATFORM_ROUTES", testdata::encode(routes));

        let config = RuntimeConfig::new(&env, DEFAULT_PREFIX).unwrap();

        let route = &config.routes()["https://www.example.com/"];
        assert_eq!(route.http_access.addresses[0].address, "10.0.0.0/8");
        assert_eq!(route.http_access.addresses[0].permission, "");
    }

    #[test]
    fn malformed_relationships_fail_construction() {
        let env = testdata::runtime_env().with("PLATFORM_RELATIONSHIPS", "***");

        let result = RuntimeConfig::new(&env, DEFAULT_PREFIX);

        assert!(matches!(
            result,
            Err(PlatformError::Decode {
                stage: DecodeStage::Base64,
                ..
            })
        ));
    }

    #[test]
    fn runtime_construction_is_deterministic() {
        let env = testdata::runtime_env();

        let first = RuntimeConfig::new(&env, DEFAULT_PREFIX).unwrap();
        let second = RuntimeConfig::new(&env, DEFAULT_PREFIX).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.build(), second.build());
    }
}
