pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect the deployment metadata the platform injects into the environment.
#[derive(Parser, Debug)]
#[command(name = "platform-config", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Prefix of the platform variables
    #[arg(long, global = true, env = "PLATFORM_CONFIG_PREFIX", default_value = "PLATFORM_")]
    pub prefix: String,

    /// Read the environment from a dotenv file instead of the process
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the build-time configuration
    Build,

    /// Show the runtime configuration
    Runtime,

    /// Print one entry of the variables mapping
    Variable {
        /// Variable name
        name: String,
        /// Value to print when the variable is not defined
        #[arg(long)]
        default: Option<String>,
    },

    /// Print the credentials of a relationship
    Credentials {
        /// Relationship name
        relationship: String,
        /// Render as a connection string (sql-dsn, libpq, amqp, mongo, memcache, solr)
        #[arg(long)]
        format: Option<String>,
    },

    /// List the routes
    Routes {
        /// Only routes forwarding to an application
        #[arg(long)]
        upstream: bool,
        /// Only upstream routes of this application
        #[arg(long)]
        app: Option<String>,
    },

    /// Show a single route
    Route {
        /// Route id
        #[arg(required_unless_present = "primary", conflicts_with = "primary")]
        id: Option<String>,
        /// Show the primary route
        #[arg(long)]
        primary: bool,
    },
}
