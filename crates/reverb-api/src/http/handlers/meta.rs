//! Informational endpoints: API metadata and health.

use axum::Json;

/// GET / - API welcome message and endpoint map.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Chatbot API",
        "endpoints": {
            "/chat": "POST - Send a message to the chatbot",
            "/history": "GET - Get chat history"
        }
    }))
}

/// GET /health - Simple health check endpoint.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let Json(body) = root().await;
        assert_eq!(body["message"], "Welcome to the Chatbot API");
        assert!(body["endpoints"]["/chat"].is_string());
        assert!(body["endpoints"]["/history"].is_string());
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
    }
}
