/*!
# Daybook

Daybook is a small personal journaling API. It stores journal entries, each
tagged with a mood and optionally with free-form tags, and exposes
create/read/update/delete plus a simple text search over a local SQLite store.

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `api`: HTTP routing, request handlers, and error mapping
- `config`: Configuration loading and validation
- `db`: SQLite access, one service module per resource
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use daybook::api::handlers::AppState;
use daybook::api::routes;
use daybook::{Config, Database};

fn build() -> daybook::AppResult<axum::Router> {
    let config = Config::load()?;
    let db = Database::open(&config.database_path)?;
    db.initialize_schema()?;
    Ok(routes::create_router(AppState { db }))
}
```
*/

/// HTTP API: routing, handlers, and error mapping
pub mod api;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// Database access for entries, moods, and tags
pub mod db;
/// Error types and utilities for error handling
pub mod errors;

// Re-export important types for convenience
pub use config::Config;
pub use db::Database;
pub use errors::{AppError, AppResult};
