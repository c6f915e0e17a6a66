//! Text Generator Port - interface to the LLM provider.
//!
//! The assessment only consumes one thing from a provider: free-form text
//! for a prompt, under an output budget. Everything else a provider API
//! returns (usage, stop reasons, model metadata) is ignored, so the port
//! stays a single method.

use async_trait::async_trait;
use thiserror::Error;

/// Port for text generation.
///
/// Implementations connect to an external model API and translate its
/// failure modes into [`GenerationError`]. Calls are fallible,
/// latency-bearing, and non-deterministic; callers must not assume any
/// output structure beyond "some text".
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates free-form text for `prompt`, bounded by `max_tokens`
    /// output tokens.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the provider call fails or times out.
    /// No retry is attempted at this layer.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError>;
}

/// Text generation errors.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Provider returned a non-success status.
    #[error("provider error (status {status}): {message}")]
    Provider {
        /// HTTP status from the provider.
        status: u16,
        /// Error details from the response body.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider response did not contain a text payload.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GenerationError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a provider error.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_displays_correctly() {
        let err = GenerationError::Timeout { timeout_secs: 60 };
        assert_eq!(err.to_string(), "request timed out after 60s");

        let err = GenerationError::provider(529, "overloaded");
        assert_eq!(err.to_string(), "provider error (status 529): overloaded");

        let err = GenerationError::RateLimited {
            retry_after_secs: 30,
        };
        assert_eq!(err.to_string(), "rate limited: retry after 30s");
    }
}
