//! Application configuration module
//!
//! Configuration is read from environment variables with the `BIOSENTINEL`
//! prefix, after an optional `.env` file has been loaded. Nested values use
//! double underscores as separators. Every section has defaults, so an empty
//! environment yields a runnable development server.
//!
//! # Example
//!
//! ```no_run
//! use biosentinel::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod content;
mod error;
mod features;
mod server;

pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Content sources (tip catalog)
    #[serde(default)]
    pub content: ContentConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `BIOSENTINEL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BIOSENTINEL__CONTENT__TIPS_PATH=tips.yaml` -> `content.tips_path = tips.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BIOSENTINEL")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.content.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("BIOSENTINEL__SERVER__PORT");
        env::remove_var("BIOSENTINEL__SERVER__ENVIRONMENT");
        env::remove_var("BIOSENTINEL__CONTENT__TIPS_PATH");
        env::remove_var("BIOSENTINEL__FEATURES__ENABLE_TRACING");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.content.tips_path.is_none());
        assert!(config.features.enable_tracing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BIOSENTINEL__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BIOSENTINEL__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_content_and_features_sections() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BIOSENTINEL__CONTENT__TIPS_PATH", "/etc/biosentinel/tips.yaml");
        env::set_var("BIOSENTINEL__FEATURES__ENABLE_TRACING", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.content.tips_path,
            Some(PathBuf::from("/etc/biosentinel/tips.yaml"))
        );
        assert!(!config.features.enable_tracing);
    }

    #[test]
    fn test_validate_rejects_bad_tips_path() {
        let config = AppConfig {
            content: ContentConfig {
                tips_path: Some(PathBuf::from("tips.txt")),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTipsPath(_))
        ));
    }
}
