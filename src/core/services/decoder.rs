use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;

use crate::core::errors::{DecodeStage, PlatformError, Result};
use crate::core::traits::env_reader::EnvReader;

/// Decodes the complex variables: base64 around a JSON document.
pub struct Decoder;

impl Decoder {
    /// Decode `value` (the content of `variable`) into `T`.
    ///
    /// # Errors
    ///
    /// `Decode` with stage `Base64` if the value is not standard base64,
    /// or stage `Json` if the decoded bytes do not parse into `T`.
    /// Nothing is returned on partial success.
    pub fn decode<T: DeserializeOwned>(variable: &str, value: &str) -> Result<T> {
        let bytes = STANDARD
            .decode(value)
            .map_err(|e| Self::failure(variable, DecodeStage::Base64, e.to_string()))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| Self::failure(variable, DecodeStage::Json, e.to_string()))
    }

    /// Read `variable` from `env` and decode it.
    ///
    /// An empty value means the variable is absent and yields `Ok(None)`;
    /// it is never handed to the base64 stage.
    pub fn read<T, E>(env: &E, variable: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        E: EnvReader + ?Sized,
    {
        let raw = env.get(variable);
        if raw.is_empty() {
            tracing::debug!(variable, "not set, skipping decode");
            return Ok(None);
        }

        let decoded = Self::decode(variable, &raw)?;
        tracing::debug!(variable, bytes = raw.len(), "decoded");
        Ok(Some(decoded))
    }

    fn failure(variable: &str, stage: DecodeStage, reason: String) -> PlatformError {
        tracing::debug!(variable, %stage, %reason, "decode failed");
        PlatformError::Decode {
            variable: variable.to_string(),
            stage,
            reason,
        }
    }
}
