//! Configuration management for the FieldScore gateway
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FIELDSCORE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::services::FailurePolicy;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Remote prediction/chat service
    pub upstream: UpstreamConfig,

    /// Chat pipeline behaviour
    pub chat: ChatConfig,

    /// Log output format
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL serving `/api/predict` and `/api/chat`
    pub base_url: String,

    /// Per-request timeout; expiry is treated like any other transport failure
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// What to answer when the assistant is unreachable
    pub failure_policy: FailurePolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of human-readable output
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FIELDSCORE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.base_url", "http://localhost:8000")?
            .set_default("upstream.timeout_secs", 10)?
            .set_default("chat.failure_policy", "fallback")?
            .set_default("logging.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FIELDSCORE_ prefix)
            .add_source(
                Environment::with_prefix("FIELDSCORE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            chat: ChatConfig {
                failure_policy: FailurePolicy::default(),
            },
            logging: LoggingConfig { json: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_files() {
        let config = Config::load().unwrap();
        assert!(config.server.port > 0);
        assert!(config.upstream.timeout_secs > 0);
    }

    #[test]
    fn test_upstream_timeout() {
        let upstream = UpstreamConfig {
            base_url: "http://scoring.internal".to_string(),
            timeout_secs: 7,
        };
        assert_eq!(upstream.timeout(), Duration::from_secs(7));
    }
}
