use colored::Colorize;
use serde_json::json;

use crate::cli::output;
use platform_config::config::app_config::AppConfig;
use platform_config::{Result, RuntimeConfig};

/// Execute the `platform-config runtime` command.
///
/// Shows build and runtime fields, the tier predicates, the defined
/// relationships and the size of the routing table.
pub fn execute(config: &AppConfig, as_json: bool) -> Result<()> {
    let runtime = super::load_runtime(config)?;

    let mut relationships: Vec<&str> = runtime.relationships().keys().map(String::as_str).collect();
    relationships.sort_unstable();

    if as_json {
        return output::json(&json!({
            "application_name": runtime.application_name(),
            "project": runtime.project(),
            "branch": runtime.branch(),
            "environment": runtime.environment(),
            "document_root": runtime.document_root(),
            "smtp_host": runtime.smtp_host(),
            "mode": runtime.mode(),
            "socket": runtime.socket(),
            "port": runtime.port(),
            "on_enterprise": runtime.on_enterprise(),
            "on_production": runtime.on_production(),
            "relationships": relationships,
            "routes": runtime.routes().len(),
        }));
    }

    output::header("Runtime environment");
    output::field("Application", runtime.application_name());
    output::field("Project", runtime.project());
    output::field("Branch", runtime.branch());
    output::field("Environment", runtime.environment());
    output::field("Document root", runtime.document_root());
    output::field("SMTP host", runtime.smtp_host());
    output::field("Mode", runtime.mode());
    output::field("Socket", runtime.socket());
    output::field("Port", runtime.port());

    print_tier(&runtime);
    print_relationships(&relationships);

    let routes = runtime.routes().len();
    let upstream = runtime.upstream_routes().len();
    println!("\n  {routes} route(s), {upstream} upstream");

    Ok(())
}

fn print_tier(runtime: &RuntimeConfig) {
    println!();
    if runtime.on_enterprise() {
        output::success("Enterprise tier");
    }
    if runtime.on_production() {
        output::success("Production environment");
    } else {
        output::warning("Not a production environment");
    }
}

fn print_relationships(names: &[&str]) {
    if names.is_empty() {
        output::warning("No relationships defined");
        return;
    }

    println!("\n{}", format!("  Relationships ({})", names.len()).bold());
    for name in names {
        println!("  {} {name}", "•".dimmed());
    }
}
