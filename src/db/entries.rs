//! Entry CRUD and search operations.
//!
//! This module provides functions for creating, reading, replacing, deleting,
//! and searching journal entries. Read operations join each entry with its
//! mood so the caller gets the denormalized `mood` sub-record; the join is a
//! read-time projection, never stored.

use crate::db::moods::Mood;
use crate::errors::{AppResult, DatabaseError};
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A journal entry.
///
/// The `mood` field carries the joined mood record on reads. Records returned
/// by [`create_entry`] have not been joined and leave it unset, which also
/// keeps it out of the serialized JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub concept: String,
    pub entry: String,
    pub date: String,
    pub mood_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

/// Client-supplied entry fields, used for both create and full replace.
///
/// The `date` string is taken as-is; no format validation is applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub concept: String,
    pub entry: String,
    pub date: String,
    pub mood_id: i64,
}

fn joined_entry_from_row(row: &Row) -> rusqlite::Result<Entry> {
    let mood_id: i64 = row.get(4)?;
    Ok(Entry {
        id: row.get(0)?,
        concept: row.get(1)?,
        entry: row.get(2)?,
        date: row.get(3)?,
        mood_id,
        mood: Some(Mood {
            id: mood_id,
            label: row.get(5)?,
        }),
    })
}

/// Retrieves all entries, each joined with its mood.
///
/// Entries whose `mood_id` references no existing mood drop out of the join.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries(conn: &Connection) -> AppResult<Vec<Entry>> {
    debug!("Listing all entries");

    let mut stmt = conn
        .prepare(
            r#"
            SELECT
                e.id,
                e.concept,
                e.entry,
                e.date,
                e.mood_id,
                m.label
            FROM entries e
            JOIN moods m ON m.id = e.mood_id
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map([], joined_entry_from_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(entries)
}

/// Retrieves one entry by id, joined with its mood.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` when the id does not exist or its mood
/// reference is dangling (the join then produces no row), or another error
/// if the database operation fails.
pub fn get_entry(conn: &Connection, entry_id: i64) -> AppResult<Entry> {
    debug!("Getting entry {}", entry_id);

    conn.query_row(
        r#"
        SELECT
            e.id,
            e.concept,
            e.entry,
            e.date,
            e.mood_id,
            m.label
        FROM entries e
        JOIN moods m ON m.id = e.mood_id
        WHERE e.id = ?1
        "#,
        params![entry_id],
        joined_entry_from_row,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound(format!("entry with id {}", entry_id)).into()
        }
        _ => DatabaseError::Sqlite(e).into(),
    })
}

/// Inserts a new entry and returns it with the store-assigned id.
///
/// The returned record echoes the input fields; it is not joined with the
/// referenced mood.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn create_entry(conn: &Connection, new_entry: &NewEntry) -> AppResult<Entry> {
    debug!("Creating entry with concept {:?}", new_entry.concept);

    conn.execute(
        r#"
        INSERT INTO entries (concept, entry, date, mood_id)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            new_entry.concept,
            new_entry.entry,
            new_entry.date,
            new_entry.mood_id
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let entry_id = conn.last_insert_rowid();
    debug!("Entry created with id {}", entry_id);

    Ok(Entry {
        id: entry_id,
        concept: new_entry.concept.clone(),
        entry: new_entry.entry.clone(),
        date: new_entry.date.clone(),
        mood_id: new_entry.mood_id,
        mood: None,
    })
}

/// Replaces all fields of the entry with the given id.
///
/// Returns `true` when a row was replaced and `false` when no row matched
/// the id; the affected-row count is the sole success signal.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn update_entry(conn: &Connection, entry_id: i64, new_entry: &NewEntry) -> AppResult<bool> {
    debug!("Replacing entry {}", entry_id);

    let rows_affected = conn
        .execute(
            r#"
            UPDATE entries
            SET concept = ?1,
                entry = ?2,
                date = ?3,
                mood_id = ?4
            WHERE id = ?5
            "#,
            params![
                new_entry.concept,
                new_entry.entry,
                new_entry.date,
                new_entry.mood_id,
                entry_id
            ],
        )
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected > 0)
}

/// Deletes the entry with the given id.
///
/// Deleting an id that does not exist is a no-op; no outcome is reported.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_entry(conn: &Connection, entry_id: i64) -> AppResult<()> {
    debug!("Deleting entry {}", entry_id);

    conn.execute("DELETE FROM entries WHERE id = ?1", params![entry_id])
        .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

/// Retrieves entries whose text contains `term`, joined with their moods.
///
/// The term is bound as a statement parameter inside the `LIKE` expression,
/// never interpolated into the SQL. Matching is a case-sensitive substring
/// containment; the `case_sensitive_like` pragma is set per connection (see
/// [`crate::db::configure_connection`]).
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn search_entries(conn: &Connection, term: &str) -> AppResult<Vec<Entry>> {
    debug!("Searching entries for {:?}", term);

    let mut stmt = conn
        .prepare(
            r#"
            SELECT
                e.id,
                e.concept,
                e.entry,
                e.date,
                e.mood_id,
                m.label
            FROM entries e
            JOIN moods m ON m.id = e.mood_id
            WHERE e.entry LIKE '%' || ?1 || '%'
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map(params![term], joined_entry_from_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(entries)
}
