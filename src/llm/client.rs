//! Reqwest client for the Mistral chat-completions API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ChatBackend, ChatOutcome, LlmConfig, LlmError};

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 1000;

/// Wire shapes of the chat-completions API. Only the fields this crate
/// touches are modeled.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Live [`ChatBackend`] over HTTP, with retry and linear backoff.
pub struct MistralClient {
    client: Client,
    config: LlmConfig,
}

impl MistralClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(LlmError::ClientBuild)?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(LlmConfig::from_env()?)
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn request_once(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ChatOutcome, LlmError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: status_message(status.as_u16(), &error_text),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|error| LlmError::Malformed(error.to_string()))?;

        if parsed.choices.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        let content = &parsed.choices[0].message.content;
        if content.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(ChatOutcome {
            content: content.clone(),
            model: parsed.model.unwrap_or_else(|| self.config.model.clone()),
        })
    }
}

#[async_trait]
impl ChatBackend for MistralClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ChatOutcome, LlmError> {
        for attempt in 1..=MAX_RETRIES {
            match self.request_once(system_prompt, user_prompt).await {
                Ok(outcome) => {
                    debug!(attempt, model = %outcome.model, "chat completion succeeded");
                    return Ok(outcome);
                }
                Err(error) => {
                    if attempt == MAX_RETRIES {
                        return Err(LlmError::Exhausted {
                            attempts: MAX_RETRIES,
                            last: error.to_string(),
                        });
                    }
                    warn!(attempt, max = MAX_RETRIES, %error, "chat completion attempt failed");
                    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS * attempt as u64))
                        .await;
                }
            }
        }
        Err(LlmError::Exhausted {
            attempts: MAX_RETRIES,
            last: "Unexpected error in retry logic".to_string(),
        })
    }
}

fn classify_transport_error(error: reqwest::Error) -> LlmError {
    if error.is_timeout() {
        LlmError::Timeout
    } else if error.is_connect() {
        LlmError::Connect
    } else {
        LlmError::Network(error)
    }
}

fn status_message(status: u16, error_text: &str) -> String {
    match status {
        401 => "Authentication failed - check your API key".to_string(),
        403 => "Access forbidden - insufficient permissions".to_string(),
        429 => "Rate limit exceeded - too many requests".to_string(),
        500..=599 => format!("Server error ({}): {}", status, error_text),
        _ => format!("HTTP error {}: {}", status, error_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_system_then_user_message() {
        let body = ChatRequest {
            model: "mistral-medium",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "rules",
                },
                ChatMessage {
                    role: "user",
                    content: "do it",
                },
            ],
            temperature: 0.7,
            max_tokens: 2000,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "mistral-medium");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "do it");
        assert_eq!(value["temperature"], 0.7);
        assert_eq!(value["max_tokens"], 2000);
    }

    #[test]
    fn response_deserializes_choice_content_and_model() {
        let parsed: ChatResponse = serde_json::from_value(json!({
            "id": "cmpl-1",
            "model": "mistral-medium-2312",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Intent\nhi"}}
            ],
            "usage": {"total_tokens": 12}
        }))
        .unwrap();

        assert_eq!(parsed.model.as_deref(), Some("mistral-medium-2312"));
        assert_eq!(parsed.choices[0].message.content, "Intent\nhi");
    }

    #[test]
    fn response_without_model_field_still_parses() {
        let parsed: ChatResponse =
            serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(parsed.model.is_none());
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn status_messages_match_api_failure_modes() {
        assert_eq!(
            status_message(401, ""),
            "Authentication failed - check your API key"
        );
        assert_eq!(
            status_message(429, ""),
            "Rate limit exceeded - too many requests"
        );
        assert_eq!(status_message(503, "down"), "Server error (503): down");
        assert_eq!(status_message(418, "teapot"), "HTTP error 418: teapot");
    }

    #[test]
    fn config_defaults_match_the_service() {
        let config = LlmConfig::default();
        assert_eq!(config.api_url, super::super::DEFAULT_API_URL);
        assert_eq!(config.model, "mistral-medium");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.max_tokens, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_a_broken_url() {
        let config = LlmConfig {
            api_url: "not a url".to_string(),
            ..LlmConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LlmError::InvalidUrl { .. })
        ));
    }
}
