//! API request handlers.
//!
//! Each handler translates one HTTP request into exactly one resource-service
//! call and translates that call's result back into a response. Database work
//! runs on the blocking thread pool with a per-request pooled connection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rusqlite::Connection;
use serde::Deserialize;
use tokio::task;

use super::error::{ApiError, ApiResult};
use crate::db::entries::{Entry, NewEntry};
use crate::db::moods::Mood;
use crate::db::tags::Tag;
use crate::db::{self, Database};
use crate::errors::AppResult;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle; clones share one connection pool.
    pub db: Database,
}

/// Query-string filter for the entries collection.
#[derive(Debug, Deserialize)]
pub struct EntriesFilter {
    /// Search term matched against the entry body.
    pub q: Option<String>,
}

/// Interprets a path segment as a record id.
///
/// An absent or non-numeric segment carries no id; that is an explicit
/// `None` the caller must handle, not an error.
pub fn parse_id_segment(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Runs a database operation on the blocking pool with its own pooled
/// connection. The connection is checked out inside the closure and released
/// when it returns, on every exit path.
async fn with_conn<T, F>(db: Database, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> AppResult<T> + Send + 'static,
{
    task::spawn_blocking(move || {
        let conn = db.get_conn()?;
        op(&conn)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("blocking task failed: {}", e)))?
    .map_err(ApiError::from)
}

/// `GET /entries` - the full collection, or a text search when `?q=` is given.
pub async fn list_entries(
    State(state): State<AppState>,
    Query(filter): Query<EntriesFilter>,
) -> ApiResult<Json<Vec<Entry>>> {
    let entries = with_conn(state.db, move |conn| match filter.q {
        Some(term) => db::entries::search_entries(conn, &term),
        None => db::entries::list_entries(conn),
    })
    .await?;

    Ok(Json(entries))
}

/// `GET /entries/{id}` - a single entry joined with its mood.
///
/// A non-numeric id segment degrades to "no id" and serves the full
/// collection instead; a numeric id that matches nothing is a 404.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    match parse_id_segment(&raw_id) {
        Some(id) => {
            let entry = with_conn(state.db, move |conn| db::entries::get_entry(conn, id)).await?;
            Ok(Json(entry).into_response())
        }
        None => {
            let entries = with_conn(state.db, db::entries::list_entries).await?;
            Ok(Json(entries).into_response())
        }
    }
}

/// `POST /entries` - creates an entry, 201 with the assigned id echoed back.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(new_entry): Json<NewEntry>,
) -> ApiResult<(StatusCode, Json<Entry>)> {
    let created =
        with_conn(state.db, move |conn| db::entries::create_entry(conn, &new_entry)).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /entries/{id}` - full-field replace; 204 on success, 404 with an
/// empty body when no row matched the id.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(new_entry): Json<NewEntry>,
) -> ApiResult<StatusCode> {
    let id = parse_id_segment(&raw_id)
        .ok_or_else(|| ApiError::BadRequest(format!("invalid entry id: {}", raw_id)))?;

    let replaced =
        with_conn(state.db, move |conn| db::entries::update_entry(conn, id, &new_entry)).await?;

    Ok(if replaced {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    })
}

/// `DELETE /entries/{id}` - 204 whether or not the row existed.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id_segment(&raw_id)
        .ok_or_else(|| ApiError::BadRequest(format!("invalid entry id: {}", raw_id)))?;

    with_conn(state.db, move |conn| db::entries::delete_entry(conn, id)).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /moods` - the full mood collection, unjoined.
pub async fn list_moods(State(state): State<AppState>) -> ApiResult<Json<Vec<Mood>>> {
    let moods = with_conn(state.db, db::moods::list_moods).await?;
    Ok(Json(moods))
}

/// `GET /tags` - the full tag collection.
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<Vec<Tag>>> {
    let tags = with_conn(state.db, db::tags::list_tags).await?;
    Ok(Json(tags))
}

/// `GET /tags/{id}` - a single tag, with the same non-numeric-id degradation
/// as entries.
pub async fn get_tag(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    match parse_id_segment(&raw_id) {
        Some(id) => {
            let tag = with_conn(state.db, move |conn| db::tags::get_tag(conn, id)).await?;
            Ok(Json(tag).into_response())
        }
        None => {
            let tags = with_conn(state.db, db::tags::list_tags).await?;
            Ok(Json(tags).into_response())
        }
    }
}

/// Fallback for any path/verb combination no route matches.
pub async fn unmatched_route() -> ApiError {
    ApiError::NotFound("no route matches the request".to_string())
}
