//! Constants used throughout the application.
//!
//! This module contains all constants used in the daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";

// Configuration Keys & Environment Variables
/// Environment variable for overriding the listen port.
pub const ENV_VAR_PORT: &str = "DAYBOOK_PORT";
/// Environment variable for overriding the database file path.
pub const ENV_VAR_DB_PATH: &str = "DAYBOOK_DB";

// Defaults
/// Default port the HTTP listener binds to.
pub const DEFAULT_PORT: u16 = 8088;
/// Default path of the SQLite database file.
pub const DEFAULT_DB_PATH: &str = "./daybook.sqlite3";

// Database Parameters
/// Maximum number of pooled SQLite connections.
pub const POOL_MAX_SIZE: u32 = 5;
