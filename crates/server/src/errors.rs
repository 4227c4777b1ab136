use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::validate::FieldErrors;
use service::StorageError;

/// API-surface error taxonomy. Validation problems carry the full
/// ordered detail list; everything unexpected collapses to an opaque
/// 500 so internals never leak to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error")]
    Validation(FieldErrors),
    /// Non-numeric path id; the kind is capitalized ("Project").
    #[error("invalid id")]
    InvalidId(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "Validation error", "details": details})),
            )
                .into_response(),
            ApiError::InvalidId(kind) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": format!("Invalid {} ID", kind.to_lowercase())})),
            )
                .into_response(),
            ApiError::NotFound(kind) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": format!("{kind} not found")})),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<FieldErrors> for ApiError {
    fn from(details: FieldErrors) -> Self {
        Self::Validation(details)
    }
}
