use crate::core::traits::env_reader::EnvReader;

/// Reads the real process environment.
///
/// Unset variables and values that are not valid UTF-8 both read as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn get(&self, name: &str) -> String {
        std::env::var(name).unwrap_or_default()
    }
}
