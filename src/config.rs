//! Configuration management for the address book binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file. The core model does not read any
//! configuration; only the binary and the shell do.

use crate::error::{ConfigError, ConfigResult};
use crate::models::AddressBook;
use std::env;
use std::path::PathBuf;

/// Default location of the save file.
pub const DEFAULT_BOOK_PATH: &str = "address_book.dat";

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the save file (default: `address_book.dat`)
    pub book_path: PathBuf,

    /// Records per page when listing (default: 5)
    pub page_size: usize,

    /// Save after every change made from the shell (default: true)
    pub autosave: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Save file path (default: `address_book.dat`)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page (default: 5)
    /// - `ADDRESS_BOOK_AUTOSAVE`: `true` or `false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let book_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.book_path);

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let autosave = Self::parse_env_bool("ADDRESS_BOOK_AUTOSAVE", defaults.autosave)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            page_size,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            page_size: AddressBook::DEFAULT_PAGE_SIZE,
            autosave: true,
            log_level: "warn".to_string(),
        }
    }
}
