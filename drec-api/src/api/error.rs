//! HTTP error mapping for API handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use drec_common::Error;
use serde_json::json;

/// Wrapper turning common errors into JSON error responses.
///
/// Validation failures map to 422, missing entities to 404, everything else
/// to 500 with the message preserved in a `message` field.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            Error::Validation(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!({ "error": message }))
            }
            Error::NotFound(_) => (StatusCode::NOT_FOUND, json!({ "error": "Not Found" })),
            err => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Server error", "message": err.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
