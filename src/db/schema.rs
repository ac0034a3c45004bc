//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for journal entries, moods, and
//! tags. Beyond primary keys there is no indexing strategy and no foreign-key
//! enforcement; the mood reference on an entry only matters at join time.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use tracing::debug;

/// Creates all database tables.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Tables
///
/// - `entries`: Journal entries, each referencing a mood by id
/// - `moods`: Read-only mood labels
/// - `tags`: Read-only tag names
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            concept TEXT NOT NULL,
            entry TEXT NOT NULL,
            date TEXT NOT NULL,
            mood_id INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS moods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            label TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tags (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Seeds starter moods and tags into empty lookup tables.
///
/// Moods and tags have no create endpoint, so a fresh database needs a
/// starter set for the read-only endpoints to return anything. Tables that
/// already contain rows are left untouched.
///
/// # Errors
///
/// Returns an error if the seed statements fail.
pub fn seed_defaults(conn: &Connection) -> AppResult<()> {
    let mood_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM moods", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;
    if mood_count == 0 {
        debug!("Seeding default moods");
        conn.execute_batch(
            "INSERT INTO moods (label) VALUES ('happy'), ('sad'), ('angry'), ('ok');",
        )
        .map_err(DatabaseError::Sqlite)?;
    }

    let tag_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;
    if tag_count == 0 {
        debug!("Seeding default tags");
        conn.execute_batch("INSERT INTO tags (name) VALUES ('home'), ('work'), ('travel');")
            .map_err(DatabaseError::Sqlite)?;
    }

    Ok(())
}
