//! HTTP-level integration tests.
//!
//! These drive the full router in-process with `tower::ServiceExt::oneshot`
//! against a temporary on-disk database, covering the request/response
//! contract end to end: status codes, bodies, and CORS headers.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use daybook::api::handlers::AppState;
use daybook::api::routes::create_router;
use daybook::Database;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Builds a router over a fresh seeded database. The TempDir must stay
/// alive for the duration of the test.
fn test_app() -> (TempDir, Router) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(&temp_dir.path().join("test.db")).unwrap();
    db.initialize_schema().unwrap();
    let app = create_router(AppState { db });
    (temp_dir, app)
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn sample_entry_body() -> Value {
    json!({
        "concept": "Morning",
        "entry": "Slept well",
        "date": "2024-01-01",
        "moodId": 1
    })
}

async fn create_sample_entry(app: &Router, body: Value) -> i64 {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/entries", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_post_then_get_round_trip() {
    let (_guard, app) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/entries", sample_entry_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["concept"], "Morning");
    assert_eq!(created["entry"], "Slept well");
    assert_eq!(created["date"], "2024-01-01");
    assert_eq!(created["moodId"], 1);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert!(
        created.get("mood").is_none(),
        "Create response is not joined with the mood"
    );

    let response = app
        .clone()
        .oneshot(get_request(&format!("/entries/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["concept"], "Morning");
    assert_eq!(fetched["mood"]["id"], 1);
    assert_eq!(fetched["mood"]["label"], "happy");
}

#[tokio::test]
async fn test_list_entries_returns_array_with_moods() {
    let (_guard, app) = test_app();
    create_sample_entry(&app, sample_entry_body()).await;
    create_sample_entry(&app, json!({
        "concept": "Evening",
        "entry": "Long walk",
        "date": "2024-01-02",
        "moodId": 2
    }))
    .await;

    let response = app.clone().oneshot(get_request("/entries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["mood"]["label"], "happy");
    assert_eq!(entries[1]["mood"]["label"], "sad");
}

#[tokio::test]
async fn test_get_missing_entry_is_404_with_error_body() {
    let (_guard, app) = test_app();

    let response = app.clone().oneshot(get_request("/entries/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("entry with id 42"));
}

#[tokio::test]
async fn test_get_non_numeric_id_serves_the_collection() {
    let (_guard, app) = test_app();
    create_sample_entry(&app, sample_entry_body()).await;

    let response = app
        .clone()
        .oneshot(get_request("/entries/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    // Trailing slash carries no id either
    let response = app.clone().oneshot(get_request("/entries/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_matches_substring_case_sensitively() {
    let (_guard, app) = test_app();
    create_sample_entry(&app, json!({
        "concept": "Beach day",
        "entry": "I walked on the beach",
        "date": "2024-01-01",
        "moodId": 1
    }))
    .await;
    create_sample_entry(&app, json!({
        "concept": "Quiet day",
        "entry": "I stayed home",
        "date": "2024-01-02",
        "moodId": 2
    }))
    .await;

    let response = app
        .clone()
        .oneshot(get_request("/entries?q=beach"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let results = body_json(response).await;
    let results = results.as_array().unwrap().to_vec();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["entry"], "I walked on the beach");

    let response = app
        .clone()
        .oneshot(get_request("/entries?q=Beach"))
        .await
        .unwrap();
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_put_replaces_and_is_visible_on_next_get() {
    let (_guard, app) = test_app();
    let id = create_sample_entry(&app, sample_entry_body()).await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/entries/{}", id),
            json!({
                "concept": "Evening",
                "entry": "Long walk",
                "date": "2024-01-02",
                "moodId": 2
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app
        .clone()
        .oneshot(get_request(&format!("/entries/{}", id)))
        .await
        .unwrap();
    let fetched = body_json(response).await;
    assert_eq!(fetched["concept"], "Evening");
    assert_eq!(fetched["entry"], "Long walk");
    assert_eq!(fetched["date"], "2024-01-02");
    assert_eq!(fetched["moodId"], 2);
    assert_eq!(fetched["mood"]["label"], "sad");
}

#[tokio::test]
async fn test_put_nonexistent_id_is_404_with_empty_body() {
    let (_guard, app) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/entries/9999",
            sample_entry_body(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn test_put_non_numeric_id_is_400() {
    let (_guard, app) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/entries/abc",
            sample_entry_body(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (_guard, app) = test_app();
    let id = create_sample_entry(&app, sample_entry_body()).await;

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/entries/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(response).await.is_empty());
    }

    let response = app.clone().oneshot(get_request("/entries")).await.unwrap();
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_post_malformed_json_is_rejected_not_fatal() {
    let (_guard, app) = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/entries")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The listener survives and keeps serving
    let response = app.clone().oneshot(get_request("/entries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_moods() {
    let (_guard, app) = test_app();

    let response = app.clone().oneshot(get_request("/moods")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let moods = body_json(response).await;
    let moods = moods.as_array().unwrap().to_vec();
    assert_eq!(moods.len(), 4);
    assert_eq!(moods[0]["label"], "happy");
}

#[tokio::test]
async fn test_tags_list_and_single_get() {
    let (_guard, app) = test_app();

    let response = app.clone().oneshot(get_request("/tags")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tags = body_json(response).await;
    assert_eq!(tags.as_array().unwrap().len(), 3);

    let response = app.clone().oneshot(get_request("/tags/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tag = body_json(response).await;
    assert_eq!(tag["id"], 1);
    assert_eq!(tag["name"], "home");

    let response = app.clone().oneshot(get_request("/tags/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_route_is_explicit_404() {
    let (_guard, app) = test_app();

    let response = app.clone().oneshot(get_request("/animals")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("no route"));

    // Moods have no single-get endpoint
    let response = app.clone().oneshot(get_request("/moods/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_on_regular_response() {
    let (_guard, app) = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/entries")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_options_preflight_advertises_methods_and_headers() {
    let (_guard, app) = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/entries")
                .header(header::ORIGIN, "http://localhost:3000")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(
                    header::ACCESS_CONTROL_REQUEST_HEADERS,
                    "content-type",
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let allow_methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_string();
    for verb in ["GET", "POST", "PUT", "DELETE"] {
        assert!(allow_methods.contains(verb), "missing {} in {}", verb, allow_methods);
    }

    let allow_headers = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allow_headers.contains("content-type"));
}
