//! Fixtures simulating a build and a runtime environment.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::adapters::env::map_env::MapEnv;
use crate::core::models::env_list::EnvList;

const ENV: &str = include_str!("ENV.json");
const ENV_RUNTIME: &str = include_str!("ENV_runtime.json");
const VARIABLES: &str = include_str!("PLATFORM_VARIABLES.json");
const APPLICATION: &str = include_str!("PLATFORM_APPLICATION.json");
const RELATIONSHIPS: &str = include_str!("PLATFORM_RELATIONSHIPS.json");
const ROUTES: &str = include_str!("PLATFORM_ROUTES.json");

pub fn encode(json: &str) -> String {
    STANDARD.encode(json)
}

fn plain(json: &str) -> EnvList {
    serde_json::from_str(json).expect("fixture is a flat JSON object")
}

/// Variables present while the application is being built.
pub fn build_env() -> MapEnv {
    MapEnv::from(plain(ENV))
        .with("PLATFORM_VARIABLES", encode(VARIABLES))
        .with("PLATFORM_APPLICATION", encode(APPLICATION))
}

/// Variables present once the application is deployed.
pub fn runtime_env() -> MapEnv {
    plain(ENV_RUNTIME).into_iter().fold(
        build_env()
            .with("PLATFORM_RELATIONSHIPS", encode(RELATIONSHIPS))
            .with("PLATFORM_ROUTES", encode(ROUTES)),
        |env, (name, value)| env.with(name, value),
    )
}
