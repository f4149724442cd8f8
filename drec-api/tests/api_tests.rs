//! Integration tests for drec-api endpoints
//!
//! Covers the versioned resource routes (releases, artists, labels), the
//! meta endpoints, the mock fallback on an unreachable store and the
//! validation/404/405 error surface.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

use drec_api::{build_router, AppState};

/// Test helper: in-memory database with schema applied
async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Should connect to in-memory database");
    drec_common::db::run_migrations(&pool)
        .await
        .expect("Should run migrations");
    pool
}

fn setup_app(db: SqlitePool) -> axum::Router {
    build_router(AppState::new(db))
}

/// Test helper: request without a body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: JSON request
fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Meta endpoints
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(setup_pool().await);

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "drec-api");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_service_banner_and_ping() {
    let app = setup_app(setup_pool().await);

    let response = app.clone().oneshot(test_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["name"], "DreamRecords API");

    let response = app.oneshot(test_request("GET", "/v1/ping")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["pong"], true);
    assert!(body["time"].is_string());
}

#[tokio::test]
async fn test_db_check_reports_driver() {
    let app = setup_app(setup_pool().await);

    let response = app.oneshot(test_request("GET", "/v1/db-check")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["driver"], "sqlite");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = setup_app(setup_pool().await);

    let response = app.oneshot(test_request("GET", "/v1/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_wrong_method_is_405() {
    let app = setup_app(setup_pool().await);

    let response = app
        .oneshot(test_request("PATCH", "/v1/releases"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Release collection
// =============================================================================

#[tokio::test]
async fn test_create_release_returns_201_and_is_listed() {
    let app = setup_app(setup_pool().await);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/releases",
            json!({"title": "City Lights", "artist": "R. Sharma"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = extract_json(response.into_body()).await;
    assert_eq!(created["title"], "City Lights");
    assert_eq!(created["status"], "In Review");
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(test_request("GET", "/v1/releases"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["title"], "City Lights");
    assert!(body.get("mock").is_none());

    let response = app
        .oneshot(test_request("GET", &format!("/v1/releases/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let item = extract_json(response.into_body()).await;
    assert_eq!(item["artist"], "R. Sharma");
    // Date comes back as YYYY-MM-DD
    let date = item["date"].as_str().unwrap();
    assert_eq!(date.len(), 10);
}

#[tokio::test]
async fn test_create_release_missing_fields_is_422() {
    let app = setup_app(setup_pool().await);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/releases",
            json!({"title": "", "artist": "R. Sharma"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("required"));

    // Nothing was persisted
    let response = app.oneshot(test_request("GET", "/v1/releases")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_create_release_with_tracks_persists_order() {
    let pool = setup_pool().await;
    let app = setup_app(pool.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/releases",
            json!({
                "title": "Summer Vibes",
                "artist": "K. Mahto",
                "status": "Approved",
                "tracks": [
                    {"title": "Sunrise", "artist": "K. Mahto", "duration_sec": 200, "order_index": 1},
                    {"title": "Noon", "duration_sec": 180, "order_index": 2}
                ]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = extract_json(response.into_body()).await;
    let id = created["id"].as_i64().unwrap();

    let tracks: Vec<(String, String, i64)> = sqlx::query_as(
        "SELECT title, artist, order_index FROM tracks WHERE release_id = ? ORDER BY order_index",
    )
    .bind(id)
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].2, 1);
    // Missing track artist defaults to the release artist
    assert_eq!(tracks[1], ("Noon".to_string(), "K. Mahto".to_string(), 2));
}

#[tokio::test]
async fn test_list_filter_scenario_city() {
    let app = setup_app(setup_pool().await);

    for (title, artist) in [("Summer Vibes", "K. Mahto"), ("City Lights", "R. Sharma")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/v1/releases",
                json!({"title": title, "artist": artist}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(test_request(
            "GET",
            "/v1/releases?q=city&status=Any&sort=Newest&page=1&limit=10",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["title"], "City Lights");
}

#[tokio::test]
async fn test_list_query_params_are_sanitized() {
    let app = setup_app(setup_pool().await);

    // Out-of-range page/limit are clamped, not rejected
    let response = app
        .oneshot(test_request("GET", "/v1/releases?page=0&limit=1000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 100);
}

#[tokio::test]
async fn test_non_numeric_page_params_coerce_to_defaults() {
    let app = setup_app(setup_pool().await);

    // Junk numeric params fall back to defaults rather than a 400 rejection
    let response = app
        .clone()
        .oneshot(test_request("GET", "/v1/releases?page=abc&limit=xyz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);

    let response = app
        .oneshot(test_request("GET", "/v1/artists?page=abc&limit="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 20);
}

#[tokio::test]
async fn test_list_status_filter_exact_match() {
    let app = setup_app(setup_pool().await);

    for (title, status) in [("A", "Approved"), ("B", "In Review"), ("C", "Approved")] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/v1/releases",
                json!({"title": title, "artist": "X", "status": status}),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(test_request("GET", "/v1/releases?status=In%20Review"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["title"], "B");
}

// =============================================================================
// Release item routes
// =============================================================================

#[tokio::test]
async fn test_get_missing_release_is_404() {
    let app = setup_app(setup_pool().await);

    let response = app
        .oneshot(test_request("GET", "/v1/releases/42"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_update_release_validation_and_success() {
    let app = setup_app(setup_pool().await);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/releases",
            json!({"title": "Old Title", "artist": "K. Mahto"}),
        ))
        .await
        .unwrap();
    let id = extract_json(response.into_body()).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/releases/{}", id),
            json!({"title": "", "artist": "K. Mahto"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/v1/releases/{}", id),
            json!({"title": "New Title", "artist": "K. Mahto"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);

    let response = app
        .oneshot(test_request("GET", &format!("/v1/releases/{}", id)))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["title"], "New Title");
}

#[tokio::test]
async fn test_delete_release_is_idempotent() {
    let app = setup_app(setup_pool().await);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/releases",
            json!({"title": "Ephemeral", "artist": "X"}),
        ))
        .await
        .unwrap();
    let id = extract_json(response.into_body()).await["id"].as_i64().unwrap();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(test_request("DELETE", &format!("/v1/releases/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = extract_json(response.into_body()).await;
        assert_eq!(body["ok"], true);
    }

    let response = app
        .oneshot(test_request("GET", &format!("/v1/releases/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Mock fallback on unreachable store
// =============================================================================

#[tokio::test]
async fn test_list_releases_falls_back_to_sample_data() {
    let pool = setup_pool().await;
    let app = setup_app(pool.clone());

    // Simulate an unreachable store
    pool.close().await;

    let response = app
        .clone()
        .oneshot(test_request("GET", "/v1/releases?page=2&limit=5"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mock"], true);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 5);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Summer Vibes");
    assert_eq!(items[1]["title"], "City Lights");
}

#[tokio::test]
async fn test_write_path_does_not_mock_on_unreachable_store() {
    let pool = setup_pool().await;
    let app = setup_app(pool.clone());
    pool.close().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/releases",
            json!({"title": "Real", "artist": "Artist"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Server error");
}

#[tokio::test]
async fn test_name_lists_fall_back_to_sample_data() {
    let pool = setup_pool().await;
    let app = setup_app(pool.clone());
    pool.close().await;

    let response = app
        .clone()
        .oneshot(test_request("GET", "/v1/labels"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mock"], true);
    assert_eq!(body["items"][0]["name"], "Swar Digital");

    let response = app.oneshot(test_request("GET", "/v1/artists")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["mock"], true);
    assert_eq!(body["items"][0]["name"], "Kuldeep Mahto");
}

// =============================================================================
// Artists and labels
// =============================================================================

#[tokio::test]
async fn test_artist_create_and_search() {
    let app = setup_app(setup_pool().await);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/v1/artists", json!({"name": "Kuldeep Mahto"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["name"], "Kuldeep Mahto");

    let response = app
        .clone()
        .oneshot(test_request("GET", "/v1/artists?q=mahto"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 1);
    assert!(body.get("mock").is_none());

    let response = app
        .oneshot(json_request("POST", "/v1/artists", json!({"name": "  "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_label_create_and_list() {
    let app = setup_app(setup_pool().await);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/v1/labels", json!({"name": "Swar Digital"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.oneshot(test_request("GET", "/v1/labels")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["name"], "Swar Digital");
}
