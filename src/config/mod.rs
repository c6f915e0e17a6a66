//! Typed configuration loaded from the environment.
//!
//! Variables carry the `CHAOS_CHECK` prefix with `__` separating nested
//! sections; a `.env` file is honored in development. Session lifetime, the
//! sweep period, the question bound, and the generation token budgets are
//! fixed domain constants and deliberately not configurable here.
//!
//! # Example
//!
//! ```no_run
//! use chaos_check::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listener and transport middleware settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Text-generation provider settings.
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// - `CHAOS_CHECK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHAOS_CHECK__AI__ANTHROPIC_API_KEY=...` -> `ai.anthropic_api_key`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHAOS_CHECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validates every section; the process refuses to start otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first value that failed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Whether this process runs in production.
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("CHAOS_CHECK__AI__ANTHROPIC_API_KEY", "sk-ant-test");
    }

    fn clear_env() {
        env::remove_var("CHAOS_CHECK__AI__ANTHROPIC_API_KEY");
        env::remove_var("CHAOS_CHECK__SERVER__PORT");
        env::remove_var("CHAOS_CHECK__SERVER__ENVIRONMENT");
    }

    #[test]
    fn loads_and_validates_with_minimal_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("load failed");
        assert!(config.validate().is_ok());
        assert_eq!(config.ai.anthropic_api_key.as_deref(), Some("sk-ant-test"));
    }

    #[test]
    fn server_section_falls_back_to_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(!config.is_production());
    }

    #[test]
    fn custom_port_overrides_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CHAOS_CHECK__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let config = AppConfig {
            server: ServerConfig::default(),
            ai: AiConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}
