use crate::core::models::env_list::EnvList;
use crate::core::traits::env_reader::EnvReader;

/// In-memory environment, used to embed or simulate a platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapEnv {
    vars: EnvList,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl From<EnvList> for MapEnv {
    fn from(vars: EnvList) -> Self {
        Self { vars }
    }
}

impl EnvReader for MapEnv {
    fn get(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}
