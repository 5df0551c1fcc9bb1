//! Configuration module for the data board.

use serde::Deserialize;
use std::path::Path;

use crate::auth::validation::is_blank;
use crate::board::StorageStrategy;
use crate::datetime;
use crate::{BoardError, Result};

/// Board configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Name of the board owner.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Initial owner password.
    #[serde(default = "default_password")]
    pub password: String,
    /// Storage strategy (flat / partitioned).
    #[serde(default)]
    pub storage: StorageStrategy,
}

fn default_owner() -> String {
    "owner".to_string()
}

fn default_password() -> String {
    "changeme".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            password: default_password(),
            storage: StorageStrategy::default(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Timezone for post timestamps (e.g., "Europe/Rome", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// strftime-style format for post timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    datetime::DEFAULT_FORMAT.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            date_format: default_date_format(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Board configuration.
    #[serde(default)]
    pub board: BoardConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BoardError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BoardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DATABOARD_OWNER`: Override the board owner
    /// - `DATABOARD_PASSWORD`: Override the initial password
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(owner) = std::env::var("DATABOARD_OWNER") {
            if !owner.is_empty() {
                self.board.owner = owner;
            }
        }
        if let Ok(password) = std::env::var("DATABOARD_PASSWORD") {
            if !password.is_empty() {
                self.board.password = password;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The owner or password is blank
    /// - The display timezone is unknown
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.board.owner) || is_blank(&self.board.password) {
            return Err(BoardError::Config(
                "board owner and password must not be blank".to_string(),
            ));
        }
        if !datetime::is_valid_timezone(&self.display.timezone) {
            return Err(BoardError::Config(format!(
                "unknown timezone: {}",
                self.display.timezone
            )));
        }
        Ok(())
    }
}
