//! Anthropic-backed implementation of the TextGenerator port.
//!
//! One blocking (non-streaming) call per turn against the Messages
//! endpoint. Only the first text block of the reply is consumed; usage
//! counters and stop metadata are dropped at this boundary. There is no
//! retry loop here: a failed call is surfaced and the client retries the
//! whole request.
//!
//! ```ignore
//! let generator = AnthropicGenerator::new(
//!     AnthropicConfig::new(api_key).with_timeout(Duration::from_secs(30)),
//! );
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{GenerationError, TextGenerator};

const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Connection settings for [`AnthropicGenerator`].
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    api_key: Secret<String>,
    /// Model the prompts run against.
    pub model: String,
    /// API base URL; overridable to point at a stub.
    pub base_url: String,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl AnthropicConfig {
    /// Settings with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-3-haiku-20240307".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// TextGenerator over the Anthropic Messages API.
pub struct AnthropicGenerator {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicGenerator {
    pub fn new(config: AnthropicConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                timeout_secs: self.config.timeout.as_secs() as u32,
            }
        } else if e.is_connect() {
            GenerationError::network(format!("Connection failed: {}", e))
        } else {
            GenerationError::network(e.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens,
            messages: vec![UserMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u32>().ok());
            let body = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => GenerationError::AuthenticationFailed,
                429 => GenerationError::RateLimited {
                    retry_after_secs: retry_after.unwrap_or(60),
                },
                code => GenerationError::provider(code, body),
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(e.to_string()))?;

        parsed
            .content
            .into_iter()
            .find_map(|block| block.text)
            .ok_or_else(|| GenerationError::parse("response contained no text block"))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<UserMessage>,
}

#[derive(Debug, Serialize)]
struct UserMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_the_messages_shape() {
        let request = MessagesRequest {
            model: "claude-3-haiku-20240307".to_string(),
            max_tokens: 200,
            messages: vec![UserMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-haiku-20240307");
        assert_eq!(json["max_tokens"], 200);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }

    #[test]
    fn response_text_block_deserializes() {
        let json = r#"{"content":[{"type":"text","text":"Chaos score: 40"}]}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.content[0].text.as_deref(),
            Some("Chaos score: 40")
        );
    }

    #[test]
    fn response_without_text_blocks_deserializes_to_none() {
        let json = r#"{"content":[{"type":"tool_use"}]}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert!(response.content[0].text.is_none());
    }

    #[test]
    fn config_builder_overrides_defaults() {
        let config = AnthropicConfig::new("sk-ant-test")
            .with_model("claude-3-opus-20240229")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "claude-3-opus-20240229");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "sk-ant-test");
    }
}
