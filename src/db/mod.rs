//! Database operations for journal entries, moods, and tags.
//!
//! This module provides SQLite database operations for the journaling API,
//! using connection pooling via r2d2 so every request checks out its own
//! scoped connection and releases it when done.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Entry CRUD and search operations
//! - `moods`: Mood lookup operations
//! - `tags`: Tag lookup operations
//!
//! # Example
//!
//! ```no_run
//! use daybook::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/daybook.sqlite3"))?;
//! db.initialize_schema()?;
//! # Ok::<(), daybook::AppError>(())
//! ```

pub mod entries;
pub mod moods;
pub mod schema;
pub mod tags;

use crate::constants::POOL_MAX_SIZE;
use crate::errors::{AppResult, DatabaseError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
///
/// Cloning is cheap; clones share the same underlying pool. Each request
/// handler clones the handle and checks out a connection for the duration
/// of its queries.
#[derive(Clone)]
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the SQLite database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The connection pool cannot be initialized
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(POOL_MAX_SIZE)
            .connection_customizer(Box::new(PragmaConfig))
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Test the connection
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.execute_batch("PRAGMA quick_check")
            .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema and seeds the read-only lookup tables.
    ///
    /// This is idempotent and safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation or seeding fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        schema::seed_defaults(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

/// Configures session pragmas on a freshly opened connection.
///
/// `case_sensitive_like` makes the parameterized `LIKE '%' || ? || '%'`
/// search clause match substrings case-sensitively.
pub fn configure_connection(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "case_sensitive_like", true)?;
    Ok(())
}

/// Connection customizer that applies the session pragmas on every checkout.
#[derive(Debug)]
struct PragmaConfig;

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for PragmaConfig {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        configure_connection(conn)
    }
}
