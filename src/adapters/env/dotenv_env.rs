use std::path::{Path, PathBuf};

use crate::core::errors::{PlatformError, Result};
use crate::core::models::env_list::EnvList;
use crate::core::traits::env_reader::EnvReader;

/// Environment read from a dotenv file instead of the process.
///
/// Lets a platform environment be replayed locally. Supports:
/// - `KEY=value` entries, with an optional leading `export `
/// - Quoted values (`KEY="value"` and `KEY='value'`)
/// - Comment lines (`# ...`) and blank lines
///
/// A key defined twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotenvEnv {
    vars: EnvList,
}

impl DotenvEnv {
    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let env = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), variables = env.vars.len(), "env file loaded");
        Ok(env)
    }

    /// Parse dotenv `content`; `source` only names the file in errors.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let mut vars = EnvList::new();

        for (idx, raw) in content.lines().enumerate() {
            if let Some((key, value)) = parse_line(raw, idx + 1, source)? {
                vars.insert(key, value);
            }
        }

        Ok(Self { vars })
    }
}

/// Parse one line; `None` for blanks and comments.
fn parse_line(raw: &str, line_number: usize, source: &Path) -> Result<Option<(String, String)>> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);

    let Some((key, value)) = trimmed.split_once('=') else {
        return Err(parse_error(
            source,
            format!("line {line_number}: expected KEY=value, got: {trimmed}"),
        ));
    };

    let key = key.trim();
    if key.is_empty() {
        return Err(parse_error(source, format!("line {line_number}: empty key")));
    }

    Ok(Some((key.to_string(), strip_quotes(value.trim()))))
}

fn parse_error(source: &Path, detail: String) -> PlatformError {
    PlatformError::EnvFileParse {
        file: PathBuf::from(source),
        detail,
    }
}

/// Remove matching surrounding quotes (single or double) from a value.
fn strip_quotes(s: &str) -> String {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

impl EnvReader for DotenvEnv {
    fn get(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}
