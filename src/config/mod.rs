//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It supports configuring the listen port and the
//! path of the SQLite database file.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_PORT`: Port for the HTTP listener (defaults to 8088)
//! - `DAYBOOK_DB`: Path to the SQLite database file (defaults to ./daybook.sqlite3)

use crate::constants::{DEFAULT_DB_PATH, DEFAULT_PORT, ENV_VAR_DB_PATH, ENV_VAR_PORT};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the daybook application.
///
/// This struct holds the settings needed to start the server: the port the
/// listener binds to and the location of the database file.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     port: 8088,
///     database_path: PathBuf::from("/tmp/journal.sqlite3"),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP listener binds to.
    pub port: u16,

    /// Path to the SQLite database file.
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DAYBOOK_PORT` is set but is not a valid
    /// port number.
    pub fn load() -> AppResult<Self> {
        let port = match env::var(ENV_VAR_PORT) {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("Invalid port number: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_path = env::var(ENV_VAR_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        Ok(Config {
            port,
            database_path,
        })
    }
}
