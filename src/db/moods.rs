//! Mood lookup operations.
//!
//! Moods are read-only in this system: there is no create, update, or delete
//! endpoint for them, only the full listing.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use serde::Serialize;
use tracing::debug;

/// A mood a journal entry can be tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mood {
    pub id: i64,
    pub label: String,
}

/// Retrieves all moods.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_moods(conn: &Connection) -> AppResult<Vec<Mood>> {
    debug!("Listing all moods");

    let mut stmt = conn
        .prepare(
            r#"
            SELECT
                m.id,
                m.label
            FROM moods m
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let moods = stmt
        .query_map([], |row| {
            Ok(Mood {
                id: row.get(0)?,
                label: row.get(1)?,
            })
        })
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(moods)
}
