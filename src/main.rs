mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use platform_config::Result;
use platform_config::config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();

    init_logging(args.verbose);

    let result = AppConfig::new(&args.prefix, args.env_file.as_deref())
        .and_then(|config| run(&args, &config));

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

fn run(args: &Cli, config: &AppConfig) -> Result<()> {
    let json = args.json;

    match &args.command {
        Commands::Build => cli::commands::build::execute(config, json),
        Commands::Runtime => cli::commands::runtime::execute(config, json),
        Commands::Variable { name, default } => {
            cli::commands::variable::execute(config, name, default.as_deref(), json)
        }
        Commands::Credentials {
            relationship,
            format,
        } => cli::commands::credentials::execute(config, relationship, format.as_deref(), json),
        Commands::Routes { upstream, app } => {
            cli::commands::routes::execute(config, *upstream, app.as_deref(), json)
        }
        Commands::Route { id, primary } => {
            cli::commands::route::execute(config, id.as_deref(), *primary, json)
        }
    }
}

/// Log to stderr so stdout stays clean for command output.
///
/// `RUST_LOG` picks the filter; `--verbose` forces debug for this crate.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("platform_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
