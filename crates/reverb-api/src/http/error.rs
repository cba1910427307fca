//! Application error type mapping to HTTP status codes.
//!
//! Bodies use the `{"detail": ...}` shape the chat frontend already
//! understands. Validation failures carry a specific message; everything
//! else collapses into a generic one so internals never leak.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use reverb_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat handling errors.
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Chat(ChatError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, "Message cannot be empty".to_string())
            }
            AppError::Chat(ChatError::History(e)) => {
                tracing::error!(error = %e, "History store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
