//! Configuration management for the FitPlan backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FA__)
//!
//! The AI credential may also come from `GEMINI_API_KEY` or `API_KEY` when
//! `FA__AI__API_KEY` is not set.

use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::env;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Environment variables checked for the AI credential, in order
const API_KEY_FALLBACKS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub tracking: TrackingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Generative AI client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Never serialized; only read from files or the environment
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

/// Simulated sensor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Interval between live step ticks
    pub step_tick_millis: u64,
    /// Largest step increment per tick (inclusive)
    pub step_tick_max_increment: u32,
    /// Device sync increment bounds (inclusive)
    pub sync_min_steps: u32,
    pub sync_max_steps: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            timeout_secs: 60,
        }
    }
}

impl AiConfig {
    /// True if a non-blank credential is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .map(|key| !key.expose_secret().trim().is_empty())
            .unwrap_or(false)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            step_tick_millis: 1000,
            step_tick_max_increment: 3,
            sync_min_steps: 500,
            sync_max_steps: 1500,
        }
    }
}

impl TrackingConfig {
    pub fn step_tick_interval(&self) -> Duration {
        Duration::from_millis(self.step_tick_millis)
    }

    pub fn sync_range(&self) -> RangeInclusive<u32> {
        self.sync_min_steps..=self.sync_max_steps
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            ai: AiConfig::default(),
            tracking: TrackingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FA__ prefix
    /// 4. `GEMINI_API_KEY` / `API_KEY` if no credential was found above
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FA__ prefix)
            // e.g., FA__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("FA").separator("__"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        if !app_config.ai.has_api_key() {
            app_config.ai.api_key = api_key_from_env();
        }
        app_config.validate()?;

        Ok(app_config)
    }

    /// Reject settings that would make the step simulation meaningless
    pub fn validate(&self) -> Result<()> {
        if self.tracking.step_tick_millis == 0 {
            anyhow::bail!("tracking.step_tick_millis must be greater than zero");
        }
        if self.tracking.sync_min_steps > self.tracking.sync_max_steps {
            anyhow::bail!("tracking.sync_min_steps must not exceed tracking.sync_max_steps");
        }
        if self.ai.timeout_secs == 0 {
            anyhow::bail!("ai.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

fn api_key_from_env() -> Option<SecretString> {
    API_KEY_FALLBACKS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .map(SecretString::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.tracking.sync_min_steps, 500);
        assert_eq!(config.tracking.sync_max_steps, 1500);
        assert!(!config.ai.has_api_key());
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let mut config = AppConfig::default();
        config.ai.api_key = Some(SecretString::new("super-secret".to_string()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
        assert!(config.ai.has_api_key());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let mut config = AppConfig::default();
        config.ai.api_key = Some(SecretString::new("   ".to_string()));
        assert!(!config.ai.has_api_key());
    }

    #[test]
    fn test_validate_rejects_inverted_sync_range() {
        let mut config = AppConfig::default();
        config.tracking.sync_min_steps = 2000;
        assert!(config.validate().is_err());

        config.tracking.sync_min_steps = 1500;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_survive_config_builder() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.tracking.step_tick_millis, 1000);
        assert!((config.ai.temperature - 0.7).abs() < 1e-6);
    }
}
