//! Exchange history HTTP handler.
//!
//! GET /history - reply `{"history": [{"user": ..., "bot": ...}, ...]}` in
//! insertion order.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use reverb_types::exchange::Exchange;

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body for the history endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<Exchange>,
}

/// GET /history - Return the full exchange log.
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let history = state.chat_service.history().await?;
    Ok(Json(HistoryResponse { history }))
}
