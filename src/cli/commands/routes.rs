use colored::Colorize;

use crate::cli::output;
use platform_config::config::app_config::AppConfig;
use platform_config::{Result, Routes};

/// Execute the `platform-config routes` command.
///
/// `--app` implies `--upstream`.
pub fn execute(config: &AppConfig, upstream: bool, app: Option<&str>, as_json: bool) -> Result<()> {
    let runtime = super::load_runtime(config)?;

    let routes: Routes = match app {
        Some(app) => runtime.upstream_routes_for_app(app),
        None if upstream => runtime.upstream_routes(),
        None => runtime.routes().clone(),
    };

    if as_json {
        return output::json(&routes);
    }

    if routes.is_empty() {
        output::warning("No routes");
        return Ok(());
    }

    output::header(&format!("Routes ({})", routes.len()));
    for (url, route) in &routes {
        let target = if route.is_upstream() {
            &route.upstream
        } else {
            &route.to
        };
        let marker = if route.primary { " (primary)".green().to_string() } else { String::new() };
        let id = route.id.as_deref().map(|id| format!(" [{id}]")).unwrap_or_default();
        println!(
            "  {} {url} {} {}{id}{marker}",
            "•".dimmed(),
            route.route_type.cyan(),
            target
        );
    }

    Ok(())
}
