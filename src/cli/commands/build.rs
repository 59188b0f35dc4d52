use serde_json::json;

use crate::cli::output;
use platform_config::Result;
use platform_config::config::app_config::AppConfig;

/// Execute the `platform-config build` command.
pub fn execute(config: &AppConfig, as_json: bool) -> Result<()> {
    let build = super::load_build(config)?;

    if as_json {
        return output::json(&json!({
            "application_name": build.application_name(),
            "tree_id": build.tree_id(),
            "app_dir": build.app_dir(),
            "project": build.project(),
            "project_entropy": build.project_entropy(),
            "variables": build.variables(),
            "application": build.application(),
        }));
    }

    output::header("Build environment");
    output::field("Application", build.application_name());
    output::field("Project", build.project());
    output::field("Tree id", build.tree_id());
    output::field("App dir", build.app_dir());
    output::field("Entropy", build.project_entropy());

    let count = build.variables().len();
    if count == 0 {
        output::warning("No variables defined");
    } else {
        output::success(&format!("{count} variable(s) defined"));
    }

    Ok(())
}
