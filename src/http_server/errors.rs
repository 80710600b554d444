//! # HTTP Errors
//!
//! Every failure a todo route can produce, and how it is written back to the
//! client. Nothing here escapes the handler boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for todo handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Lookup or update of an unknown id
    #[error("Todo not found")]
    TodoNotFound,

    /// Delete of an unknown id
    #[error("Todo doesn't exist")]
    TodoDoesNotExist,

    /// PATCH body is not a JSON object (or null)
    #[error("{0}")]
    MalformedBody(String),

    /// POST body does not decode as a todo. Answered with a bare 400.
    #[error("request body is not a todo")]
    UnreadableBody,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::TodoNotFound | ApiError::TodoDoesNotExist => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(_) | ApiError::UnreadableBody => StatusCode::BAD_REQUEST,
        }
    }

    fn has_body(&self) -> bool {
        !matches!(self, ApiError::UnreadableBody)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::TodoNotFound,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if !self.has_body() {
            return status.into_response();
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
