//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present; loading never touches
//! stdout, which belongs to the command transcript.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upcoming-birthday window in days, both bounds inclusive (default: 7)
    pub upcoming_window_days: i64,

    /// Log filter used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UPCOMING_WINDOW_DAYS`: upcoming-birthday window in days (default: 7)
    /// - `LOG_LEVEL`: fallback tracing filter (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let upcoming_window_days = Self::parse_env_i64("UPCOMING_WINDOW_DAYS", 7)?;

        if !(0..=366).contains(&upcoming_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_WINDOW_DAYS".to_string(),
                reason: "Must be between 0 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            upcoming_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number of days, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
