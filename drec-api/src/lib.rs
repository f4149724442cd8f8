//! drec-api library - DreamRecords resource API
//!
//! CRUD endpoints for releases, artists and labels under a versioned `/v1`
//! base path, backed by SQLite. List reads degrade to a built-in sample
//! dataset (flagged `mock: true`) when the store is unreachable; writes
//! surface hard errors instead.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod sample;
pub mod store;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::service_banner))
        .route("/v1/ping", get(api::ping))
        .route("/v1/db-check", get(api::db_check))
        .route(
            "/v1/releases",
            get(api::list_releases).post(api::create_release),
        )
        .route(
            "/v1/releases/:id",
            get(api::get_release)
                .put(api::update_release)
                .delete(api::delete_release),
        )
        .route("/v1/artists", get(api::list_artists).post(api::create_artist))
        .route("/v1/labels", get(api::list_labels).post(api::create_label))
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
