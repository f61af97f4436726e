//! Configuration management for rolodex.
//!
//! Configuration comes from environment variables (with an optional `.env`
//! file via dotenvy). Every variable has a default, so a bare environment
//! always yields a working configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book file (default: "addressbook.json")
    pub storage_path: PathBuf,

    /// Default window for the upcoming-birthdays listing, in days (default: 30)
    pub birthday_window_days: u32,

    /// Log level for the stderr diagnostics (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_STORAGE_PATH`: address book file path
    /// - `ROLODEX_BIRTHDAY_WINDOW_DAYS`: default reminder window in days
    /// - `ROLODEX_LOG_LEVEL`: logging level
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; never fail when it is absent
        let _ = dotenvy::dotenv();

        let storage_path = env::var("ROLODEX_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("addressbook.json"));

        let birthday_window_days = Self::parse_env_u32("ROLODEX_BIRTHDAY_WINDOW_DAYS", 30)?;

        let log_level = env::var("ROLODEX_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from("addressbook.json"),
            birthday_window_days: 30,
            log_level: "error".to_string(),
        }
    }
}
