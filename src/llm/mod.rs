//! Transport to the chat-completions service.
//!
//! The pipeline only needs one thing from a model: system prompt plus user
//! prompt in, completion text out. [`ChatBackend`] is that seam; the live
//! implementation is [`MistralClient`], and tests substitute canned backends.

pub mod client;

pub use client::MistralClient;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// Required: the API key. Never read from a settings file.
pub const API_KEY_VAR: &str = "MISTRAL_API_KEY";
/// Optional endpoint override.
pub const API_URL_VAR: &str = "MISTRAL_API_URL";
/// Optional model override.
pub const MODEL_VAR: &str = "MISTRAL_MODEL";

pub const DEFAULT_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistral-medium";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("Invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API")]
    Connect,
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    /// Non-success HTTP status, with the message already shaped for display.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse API response as JSON: {0}")]
    Malformed(String),
    #[error("API returned empty response")]
    EmptyResponse,
    #[error("API returned empty content")]
    EmptyContent,
    #[error("All {attempts} attempts failed. Last error: {last}")]
    Exhausted { attempts: u32, last: String },
}

/// Connection settings for the live client.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// Defaults plus environment overrides.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::default().with_env()
    }

    /// Apply environment variables on top of `self`. The key is required and
    /// must be non-blank; URL and model are taken when present.
    pub fn with_env(mut self) -> Result<Self, LlmError> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => self.api_key = key,
            _ => return Err(LlmError::MissingEnv(API_KEY_VAR)),
        }
        if let Ok(url) = std::env::var(API_URL_VAR) {
            self.api_url = url;
        }
        if let Ok(model) = std::env::var(MODEL_VAR) {
            self.model = model;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), LlmError> {
        Url::parse(&self.api_url).map_err(|source| LlmError::InvalidUrl {
            url: self.api_url.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Completion produced by a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOutcome {
    pub content: String,
    /// Model name reported by the service, or the configured one when the
    /// service does not echo it back.
    pub model: String,
}

/// Seam between the pipeline and the completion service.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ChatOutcome, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The process environment is global, so every MISTRAL_* scenario lives
    // in this one test; no other test in the crate reads these variables.
    #[test]
    fn with_env_requires_the_key_and_applies_overrides() {
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(API_URL_VAR);
        std::env::remove_var(MODEL_VAR);

        let error = LlmConfig::from_env().unwrap_err();
        assert!(matches!(error, LlmError::MissingEnv(name) if name == API_KEY_VAR));

        std::env::set_var(API_KEY_VAR, "   ");
        let error = LlmConfig::from_env().unwrap_err();
        assert!(matches!(error, LlmError::MissingEnv(_)));

        std::env::set_var(API_KEY_VAR, "sk-test");
        let config = LlmConfig::from_env().unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);

        std::env::set_var(API_URL_VAR, "https://example.test/v1/chat/completions");
        std::env::set_var(MODEL_VAR, "mistral-large");
        let config = LlmConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://example.test/v1/chat/completions");
        assert_eq!(config.model, "mistral-large");

        let client = MistralClient::from_env().unwrap();
        assert_eq!(client.model(), "mistral-large");

        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(API_URL_VAR);
        std::env::remove_var(MODEL_VAR);
    }
}
