//! Axum-specific error types and mappings.
//!
//! This module provides the HTTP error type and the mapping from
//! `CoreError` to status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use plantstore_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Message sent for every internal failure. Details go to the log only.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

const NOT_FOUND_MESSAGE: &str = "Plant not found";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error. The message is safe to show to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::NotFound(_) => Self::NotFound(NOT_FOUND_MESSAGE.to_string()),
            CoreError::Repository(_) | CoreError::Storage(_) => {
                tracing::error!(target: "plantstore.http", error = %err, "Request failed");
                Self::Internal(SERVER_ERROR_MESSAGE.to_string())
            }
        }
    }
}
