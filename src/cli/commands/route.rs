use crate::cli::output;
use platform_config::config::app_config::AppConfig;
use platform_config::{PlatformError, Result, Route};

/// Execute the `platform-config route <id>` / `route --primary` command.
pub fn execute(config: &AppConfig, id: Option<&str>, primary: bool, as_json: bool) -> Result<()> {
    let runtime = super::load_runtime(config)?;

    let (found, lookup) = match id {
        Some(id) if !primary => (runtime.route(id), format!("id '{id}'")),
        _ => (runtime.primary_route(), "the primary route".to_string()),
    };

    let route = found.ok_or(PlatformError::RouteNotFound { lookup })?;

    if as_json {
        return output::json(route);
    }

    print_route(route);
    Ok(())
}

fn print_route(route: &Route) {
    output::header(&route.url);
    output::field("Type", &route.route_type);
    output::field("Id", route.id.as_deref().unwrap_or_default());
    output::field("Original URL", &route.original_url);
    if route.is_redirect() {
        output::field("Redirects to", &route.to);
    } else {
        output::field("Upstream", &route.upstream);
    }
    output::field("Cache", if route.cache.enabled { "enabled" } else { "disabled" });
    output::field("SSI", if route.ssi.enabled { "enabled" } else { "disabled" });
    if route.primary {
        output::success("Primary route");
    }
    if route.restrict_robots {
        output::success("Robots restricted");
    }
}
