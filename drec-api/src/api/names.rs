//! Artist and label endpoints (name-only entities)

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use drec_common::types::{NameList, NameRecord, NewName};

use crate::api::ApiError;
use crate::store::NameTable;
use crate::{sample, store, AppState};

/// Query parameters for the name list endpoints. Numeric values coerce
/// leniently, as on the releases list.
#[derive(Debug, Deserialize)]
pub struct NameListQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub limit: String,
}

impl NameListQuery {
    fn page_window(&self) -> (i64, i64) {
        let page = crate::api::releases::lenient_int(&self.page, 1).max(1);
        let limit = crate::api::releases::lenient_int(&self.limit, 20)
            .clamp(1, drec_common::filter::MAX_PAGE_SIZE);
        (page, limit)
    }
}

async fn list_names(state: &AppState, table: NameTable, query: NameListQuery) -> Json<NameList> {
    let (page, limit) = query.page_window();

    match store::names::list(&state.db, table, &query.q, page, limit).await {
        Ok(list) => Json(list),
        Err(e) => {
            warn!("{:?} list unavailable, serving sample data: {}", table, e);
            let fallback = match table {
                NameTable::Artists => sample::sample_artists(page, limit),
                NameTable::Labels => sample::sample_labels(page, limit),
            };
            Json(fallback)
        }
    }
}

async fn create_name(
    state: &AppState,
    table: NameTable,
    req: NewName,
) -> Result<(StatusCode, Json<NameRecord>), ApiError> {
    let record = store::names::create(&state.db, table, &req.name).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /v1/artists?q&page&limit
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<NameListQuery>,
) -> Json<NameList> {
    list_names(&state, NameTable::Artists, query).await
}

/// POST /v1/artists
pub async fn create_artist(
    State(state): State<AppState>,
    Json(req): Json<NewName>,
) -> Result<(StatusCode, Json<NameRecord>), ApiError> {
    create_name(&state, NameTable::Artists, req).await
}

/// GET /v1/labels?q&page&limit
pub async fn list_labels(
    State(state): State<AppState>,
    Query(query): Query<NameListQuery>,
) -> Json<NameList> {
    list_names(&state, NameTable::Labels, query).await
}

/// POST /v1/labels
pub async fn create_label(
    State(state): State<AppState>,
    Json(req): Json<NewName>,
) -> Result<(StatusCode, Json<NameRecord>), ApiError> {
    create_name(&state, NameTable::Labels, req).await
}
