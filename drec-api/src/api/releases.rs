//! Release collection and item endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use drec_common::types::{
    CreatedRelease, NewRelease, OkResponse, ReleaseList, ReleaseRecord, UpdateRelease,
};
use drec_common::ReleaseFilter;

use crate::api::ApiError;
use crate::{sample, store, AppState};

/// Query parameters for GET /v1/releases.
///
/// `page` and `limit` arrive as raw strings so non-numeric values coerce to
/// the defaults instead of rejecting the request with a 400.
#[derive(Debug, Deserialize)]
pub struct ReleaseListQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub sort: String,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub limit: String,
}

impl ReleaseListQuery {
    fn into_filter(self) -> ReleaseFilter {
        let mut filter = ReleaseFilter {
            q: self.q.trim().to_string(),
            status: self.status.into(),
            sort: self.sort.into(),
            page: lenient_int(&self.page, 1),
            page_size: lenient_int(&self.limit, drec_common::filter::DEFAULT_PAGE_SIZE),
        };
        filter.clamp();
        filter
    }
}

/// Parse an integer query value, falling back to `default` on junk input
pub(crate) fn lenient_int(value: &str, default: i64) -> i64 {
    value.trim().parse().unwrap_or(default)
}

/// GET /v1/releases?q&status&sort&page&limit
///
/// Never fails: if the store is unreachable the fixed sample dataset is
/// served with `mock: true` instead of an error.
pub async fn list_releases(
    State(state): State<AppState>,
    Query(query): Query<ReleaseListQuery>,
) -> Json<ReleaseList> {
    let filter = query.into_filter();

    match store::releases::list(&state.db, &filter).await {
        Ok(list) => Json(list),
        Err(e) => {
            warn!("release list unavailable, serving sample data: {}", e);
            Json(sample::sample_releases(filter.page, filter.page_size))
        }
    }
}

/// POST /v1/releases
///
/// Write path: validation and store failures surface as errors, never as
/// mocked success.
pub async fn create_release(
    State(state): State<AppState>,
    Json(req): Json<NewRelease>,
) -> Result<(StatusCode, Json<CreatedRelease>), ApiError> {
    let created = store::releases::create(&state.db, &req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /v1/releases/:id
pub async fn get_release(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReleaseRecord>, ApiError> {
    let record = store::releases::get(&state.db, id).await?;
    Ok(Json(record))
}

/// PUT /v1/releases/:id
pub async fn update_release(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRelease>,
) -> Result<Json<OkResponse>, ApiError> {
    store::releases::update(&state.db, id, &req).await?;
    Ok(Json(OkResponse { ok: true }))
}

/// DELETE /v1/releases/:id
pub async fn delete_release(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    store::releases::delete(&state.db, id).await?;
    Ok(Json(OkResponse { ok: true }))
}
