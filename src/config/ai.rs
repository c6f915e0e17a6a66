//! Text-generation provider configuration.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Settings for the Anthropic-backed text generator.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key; required for the process to start.
    pub anthropic_api_key: Option<String>,

    /// Model the assessment prompts run against.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL; overridable to point at a stub in tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout for generation requests, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// The generation timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether a non-empty API key was supplied.
    pub fn has_api_key(&self) -> bool {
        self.anthropic_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty())
    }

    /// Rejects configurations the generator cannot run with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "claude-3-haiku-20240307");
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.has_api_key());
    }

    #[test]
    fn timeout_converts_to_duration() {
        let config = AiConfig {
            timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn empty_api_key_fails_validation() {
        let config = AiConfig {
            anthropic_api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn present_api_key_passes_validation() {
        let config = AiConfig {
            anthropic_api_key: Some("sk-ant-test".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
