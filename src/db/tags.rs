//! Tag lookup operations.
//!
//! Tags are read-only: only the full listing and single-record lookup are
//! exposed. Nothing associates a tag with an entry yet; see DESIGN.md for
//! the open question on an entry-tag association table.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::{params, Connection};
use serde::Serialize;
use tracing::debug;

/// A free-form tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Retrieves all tags.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_tags(conn: &Connection) -> AppResult<Vec<Tag>> {
    debug!("Listing all tags");

    let mut stmt = conn
        .prepare(
            r#"
            SELECT
                t.id,
                t.name
            FROM tags t
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let tags = stmt
        .query_map([], |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(tags)
}

/// Retrieves a tag by id.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no tag has the given id, or another
/// error if the database operation fails.
pub fn get_tag(conn: &Connection, tag_id: i64) -> AppResult<Tag> {
    debug!("Getting tag {}", tag_id);

    conn.query_row(
        r#"
        SELECT
            t.id,
            t.name
        FROM tags t
        WHERE t.id = ?1
        "#,
        params![tag_id],
        |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound(format!("tag with id {}", tag_id)).into()
        }
        _ => DatabaseError::Sqlite(e).into(),
    })
}
