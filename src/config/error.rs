//! Errors for configuration loading and validation.

use thiserror::Error;

/// Failure while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("configuration invalid: {0}")]
    Invalid(#[from] ValidationError),
}

/// A loaded value that cannot be used as-is.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,
}
