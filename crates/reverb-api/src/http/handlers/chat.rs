//! Chat message HTTP handler.
//!
//! POST /chat - body `{"content": "..."}`, reply `{"response": "Echo: ..."}`.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user message to send to the bot.
    pub content: String,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The generated reply.
    pub response: String,
}

/// POST /chat - Handle one chat message.
///
/// Validates, derives the echo reply, records the exchange, and returns the
/// reply. 400 on empty/whitespace content, 500 on store failure.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = Uuid::now_v7();

    let response = state.chat_service.handle(&body.content).await?;
    info!(%request_id, chars = body.content.len(), "Chat message handled");

    Ok(Json(ChatResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_chat_returns_echo_response() {
        let state = AppState::new();
        let body = ChatRequest {
            content: "hello".to_string(),
        };

        let Json(reply) = chat(State(state), Json(body)).await.unwrap();
        assert_eq!(reply.response, "Echo: hello");
    }

    #[tokio::test]
    async fn test_chat_records_exchange() {
        let state = AppState::new();
        let body = ChatRequest {
            content: "hello".to_string(),
        };
        chat(State(state.clone()), Json(body)).await.unwrap();

        let history = state.chat_service.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_text, "hello");
        assert_eq!(history[0].bot_text, "Echo: hello");
    }

    #[tokio::test]
    async fn test_chat_rejects_whitespace_content_with_400() {
        let state = AppState::new();
        let body = ChatRequest {
            content: "   ".to_string(),
        };

        let err = chat(State(state.clone()), Json(body)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(state.chat_service.history().await.unwrap().is_empty());
    }
}
