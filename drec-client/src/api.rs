//! HTTP client for the DreamRecords resource API
//!
//! Thin wrapper over reqwest mapping the API's error surface onto the
//! common error taxonomy: 422 bodies become `Validation`, 404 becomes
//! `NotFound`, transport failures become `Unavailable`. Single-attempt
//! semantics throughout; no retries, no backoff.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use drec_common::types::{
    CreatedRelease, ErrorBody, NameList, NameRecord, NewName, NewRelease, OkResponse,
    ReleaseList, ReleaseRecord, UpdateRelease,
};
use drec_common::{Error, ReleaseFilter, Result};

/// Client for the versioned resource API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the API at `base_url` (e.g. "http://127.0.0.1:5731")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| Error::Internal(format!("Malformed response body: {}", e)));
        }

        let body = response.json::<ErrorBody>().await.ok();
        let message = body
            .map(|b| b.error)
            .unwrap_or_else(|| status.to_string());

        Err(match status {
            StatusCode::UNPROCESSABLE_ENTITY => Error::Validation(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            _ => Error::Internal(message),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Unavailable(e.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Unavailable(e.to_string()))?;
        Self::decode(response).await
    }

    // --- releases ---

    /// GET /v1/releases with the filter's query/status/sort/page window.
    /// Empty query and "Any" status are omitted from the request.
    pub async fn list_releases(&self, filter: &ReleaseFilter) -> Result<ReleaseList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if !filter.q.trim().is_empty() {
            query.push(("q", filter.q.trim().to_string()));
        }
        if !filter.status.is_any() {
            query.push(("status", filter.status.as_str().to_string()));
        }
        query.push(("sort", filter.sort.as_str().to_string()));
        query.push(("page", filter.page.to_string()));
        query.push(("limit", filter.page_size.to_string()));

        self.get_json("/v1/releases", &query).await
    }

    /// POST /v1/releases
    pub async fn create_release(&self, req: &NewRelease) -> Result<CreatedRelease> {
        self.post_json("/v1/releases", req).await
    }

    /// GET /v1/releases/:id
    pub async fn get_release(&self, id: i64) -> Result<ReleaseRecord> {
        self.get_json(&format!("/v1/releases/{}", id), &[]).await
    }

    /// PUT /v1/releases/:id
    pub async fn update_release(&self, id: i64, req: &UpdateRelease) -> Result<OkResponse> {
        let response = self
            .http
            .put(self.url(&format!("/v1/releases/{}", id)))
            .json(req)
            .send()
            .await
            .map_err(|e| Error::Unavailable(e.to_string()))?;
        Self::decode(response).await
    }

    /// DELETE /v1/releases/:id
    pub async fn delete_release(&self, id: i64) -> Result<OkResponse> {
        let response = self
            .http
            .delete(self.url(&format!("/v1/releases/{}", id)))
            .send()
            .await
            .map_err(|e| Error::Unavailable(e.to_string()))?;
        Self::decode(response).await
    }

    // --- artists and labels ---

    pub async fn list_artists(&self, q: &str, page: i64, limit: i64) -> Result<NameList> {
        self.list_names("/v1/artists", q, page, limit).await
    }

    pub async fn create_artist(&self, name: &str) -> Result<NameRecord> {
        self.post_json("/v1/artists", &NewName { name: name.to_string() }).await
    }

    pub async fn list_labels(&self, q: &str, page: i64, limit: i64) -> Result<NameList> {
        self.list_names("/v1/labels", q, page, limit).await
    }

    pub async fn create_label(&self, name: &str) -> Result<NameRecord> {
        self.post_json("/v1/labels", &NewName { name: name.to_string() }).await
    }

    async fn list_names(&self, path: &str, q: &str, page: i64, limit: i64) -> Result<NameList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if !q.trim().is_empty() {
            query.push(("q", q.trim().to_string()));
        }
        query.push(("page", page.to_string()));
        query.push(("limit", limit.to_string()));
        self.get_json(path, &query).await
    }
}
