//! Optional settings file on top of the environment.
//!
//! Everything has a default, so the file is only for overrides. The API key
//! deliberately has no file field; it comes from the environment (or a
//! `.env` file loaded by the binary).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::llm::{LlmConfig, LlmError};
use crate::prompt::SectionLayout;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Crate settings, loadable from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which section layout generation requests ask for.
    pub layout: SectionLayout,
    pub llm: LlmSettings,
}

/// Connection overrides from the settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Settings =
            toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Build the live-client config. Precedence, lowest to highest:
    /// built-in defaults, this settings file, then the environment.
    pub fn llm_config(&self) -> Result<LlmConfig, ConfigError> {
        let mut config = LlmConfig::default();
        if let Some(api_url) = &self.llm.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(model) = &self.llm.model {
            config.model = model.clone();
        }
        if let Some(temperature) = self.llm.temperature {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = self.llm.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(timeout_secs) = self.llm.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        Ok(config.with_env()?)
    }
}
