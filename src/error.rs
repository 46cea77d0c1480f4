//! Request-level error types and their HTTP mapping.
//!
//! Every failure response carries the shape
//! `{"success": false, "error": <message>}` so callers can branch on the
//! single boolean field regardless of which stage of the request failed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// ---

/// Everything that can terminate a request with a failure response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was not a JSON object of the expected shape.
    #[error("Invalid data format (Expected JSON)")]
    InvalidFormat,

    /// One or more of the six sensor fields was absent or explicitly null.
    #[error("One or more sensor values are missing")]
    MissingField,

    /// A store read or write failed. The store's error text is passed
    /// through verbatim to the caller.
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidFormat | ApiError::MissingField => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (status, body).into_response()
    }
}
