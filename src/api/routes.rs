//! API route definitions.

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Creates the API router with all routes, CORS, and request tracing
/// configured.
///
/// `/entries/` and `/tags/` are registered separately because a trailing
/// slash is a distinct path to the router; it carries no id and serves the
/// collection.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/entries/", get(handlers::list_entries))
        .route(
            "/entries/{id}",
            get(handlers::get_entry)
                .put(handlers::update_entry)
                .delete(handlers::delete_entry),
        )
        .route("/moods", get(handlers::list_moods))
        .route("/tags", get(handlers::list_tags))
        .route("/tags/", get(handlers::list_tags))
        .route("/tags/{id}", get(handlers::get_tag))
        .fallback(handlers::unmatched_route)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS for browser clients.
///
/// Preflight responses advertise the verbs and headers the API accepts;
/// every response carries `Access-Control-Allow-Origin: *`.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
