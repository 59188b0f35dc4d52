use std::fmt;
use std::path::PathBuf;

/// Stage of the two-step decode that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// The raw value was not valid standard base64.
    Base64,
    /// The decoded bytes were not JSON of the expected shape.
    Json,
}

impl fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeStage::Base64 => write!(f, "base64"),
            DecodeStage::Json => write!(f, "json"),
        }
    }
}

/// All domain errors for platform-config.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error(
        "Not a valid platform environment: {variable} is not set\n\n  \
         The process does not appear to be running on the platform.\n  \
         Fall back to local configuration, or simulate one with --env-file."
    )]
    NotValidPlatform { variable: String },

    #[error(
        "Not a valid runtime platform environment: {variable} is not set\n\n  \
         Build-time values are available, runtime values are not.\n  \
         Runtime data (relationships, routes, branch) only exists once deployed."
    )]
    NotRuntimePlatform { variable: String },

    #[error("Could not decode {variable} ({stage} stage): {reason}")]
    Decode {
        variable: String,
        stage: DecodeStage,
        reason: String,
    },

    #[error(
        "No such relationship: {name}\n\n  \
         Check the relationships defined for this application.\n  \
         Run 'platform-config runtime' to list the available ones."
    )]
    RelationshipNotFound { name: String },

    #[error(
        "Variable '{name}' not found\n\n  \
         Pass --default to fall back to a value when it is not defined."
    )]
    VariableNotFound { name: String },

    #[error("No route found for {lookup}")]
    RouteNotFound { lookup: String },

    #[error(
        "Unknown credential format '{name}'\n\n  \
         Available formats: {available}"
    )]
    UnknownFormatter { name: String, available: String },

    #[error(
        "Invalid variable prefix '{prefix}': {reason}\n\n  \
         Expected something like PLATFORM_ (letters, digits and underscores)."
    )]
    InvalidPrefix { prefix: String, reason: String },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected format: KEY=value (one per line).\n  \
         Comments (#) and blank lines are allowed."
    )]
    EnvFileParse { file: PathBuf, detail: String },

    #[error("Cannot format credential as {formatter}: {reason}")]
    FormatFailed { formatter: String, reason: String },

    #[error("Could not render output as JSON: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlatformError>;
