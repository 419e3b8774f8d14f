//! API error responses.
//!
//! Every failure leaving a handler is an [`ApiError`], rendered as
//! `{"error": "<message>"}` with a matching HTTP status. Internal
//! detail is logged, never sent to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pantry_core::PantryError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, malformed, or expired session credentials.
    #[error("Unauthorized")]
    Unauthorized,

    /// The request was understood but its content is unacceptable.
    #[error("{0}")]
    InvalidArgument(String),

    /// The addressed resource does not exist for this caller.
    #[error("{0}")]
    NotFound(String),

    /// The request collides with existing state.
    #[error("{0}")]
    Conflict(String),

    /// Anything the caller cannot fix. The payload carries a generic
    /// message; the detail goes to the log.
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidArgument(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<PantryError> for ApiError {
    fn from(err: PantryError) -> Self {
        match err {
            PantryError::NotFound { entity, .. } => {
                ApiError::NotFound(format!("{} not found", capitalize(&entity)))
            }
            PantryError::AlreadyExists { entity } => {
                ApiError::Conflict(format!("{} already exists", capitalize(&entity)))
            }
            PantryError::AuthenticationFailed { .. } => ApiError::Unauthorized,
            PantryError::Validation { message } => ApiError::InvalidArgument(message),
            PantryError::Database(detail) | PantryError::Internal(detail) => {
                ApiError::Internal(detail)
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
