//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every rejected submission collapses to one client-error response with a
//! fixed code and message. The internal rejection kind is never returned to
//! the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tlm_core::ValidationError;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "INVALID_REQUESTED_DATA").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The submission was rejected by the validator (400).
    #[error("invalid request data: {0}")]
    InvalidRequestData(#[from] ValidationError),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidRequestData(e) => (
                StatusCode::from_u16(e.class().status_code()).unwrap_or(StatusCode::BAD_REQUEST),
                e.error_code(),
            ),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Client-safe message.
    fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidRequestData(e) => e.client_message(),
            Self::Internal(_) => "An internal error occurred",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if let Self::Internal(_) = &self {
            tracing::error!(error = %self, "internal server error");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.client_message().to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}
