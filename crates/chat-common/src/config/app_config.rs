//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).
//! Validation limits are domain constants in `chat-core` and are not configurable.

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use tracing::Level;

use crate::telemetry::TracingConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub log: LogSettings,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidValue("APP_ENV", s.to_string())),
        }
    }
}

/// Logging overrides; unset values fall back to the environment's preset
#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    pub level: Option<Level>,
    pub json: Option<bool>,
    pub rejections: Option<bool>,
}

fn default_app_name() -> String {
    "chat-validation".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = lookup("APP_ENV")
            .map(|s| s.parse())
            .transpose()?
            .unwrap_or_default();

        let level = lookup("LOG_LEVEL")
            .map(|s| {
                Level::from_str(&s).map_err(|_| ConfigError::InvalidValue("LOG_LEVEL", s))
            })
            .transpose()?;

        let json = lookup("LOG_JSON")
            .map(|s| parse_flag("LOG_JSON", s))
            .transpose()?;
        let rejections = lookup("LOG_REJECTIONS")
            .map(|s| parse_flag("LOG_REJECTIONS", s))
            .transpose()?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            log: LogSettings {
                level,
                json,
                rejections,
            },
        })
    }

    /// Tracing setup for this environment, with log overrides applied
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let mut config = match self.app.env {
            Environment::Production => TracingConfig::production(),
            Environment::Development => TracingConfig::development(),
            Environment::Staging => TracingConfig {
                log_rejections: true,
                ..TracingConfig::default()
            },
        };
        if let Some(level) = self.log.level {
            config.level = level;
        }
        if let Some(json) = self.log.json {
            config.json = json;
        }
        if let Some(rejections) = self.log.rejections {
            config.log_rejections = rejections;
        }
        config
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key, value)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
