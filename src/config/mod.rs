//! Environment-backed configuration.
//!
//! All settings are optional; override with `SIMSCORE_*` environment
//! variables. The binary decides what is required (a model path or an
//! explicit stub opt-in) — see `src/main.rs`.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

/// Process configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIMSCORE_*` overrides on top of defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory holding `model.safetensors` + `config.json` for the
    /// MiniLM embedding model.
    pub model_path: Option<PathBuf>,

    /// Path to `tokenizer.json`. Defaults to `<model_path>/tokenizer.json`.
    pub tokenizer_path: Option<PathBuf>,

    /// Run the embedder in deterministic stub mode (no model files).
    /// Stub scores are synthetic; only meaningful for tests and smoke runs.
    pub embedder_stub: bool,
}

impl Config {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "SIMSCORE_MODEL_PATH";
    /// Env var used to locate the tokenizer file.
    pub const ENV_TOKENIZER_PATH: &'static str = "SIMSCORE_TOKENIZER_PATH";
    /// Env var that opts into the stub embedder.
    pub const ENV_EMBEDDER_STUB: &'static str = "SIMSCORE_EMBEDDER_STUB";

    /// Loads config from environment variables (unset values become `None`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let model_path = read_path_var(Self::ENV_MODEL_PATH);
        let tokenizer_path = read_path_var(Self::ENV_TOKENIZER_PATH);
        let embedder_stub = match env::var(Self::ENV_EMBEDDER_STUB) {
            Ok(value) => parse_flag(Self::ENV_EMBEDDER_STUB, &value)?,
            Err(_) => false,
        };

        Ok(Self {
            model_path,
            tokenizer_path,
            embedder_stub,
        })
    }

    /// Validates that configured paths exist.
    ///
    /// Unset paths pass validation; requiredness is decided at the call
    /// site, not here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.model_path
            && !path.exists()
        {
            return Err(ConfigError::PathNotFound { path: path.clone() });
        }

        if let Some(path) = &self.tokenizer_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }
}

fn read_path_var(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
