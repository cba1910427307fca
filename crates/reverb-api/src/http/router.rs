//! Axum router configuration with middleware.
//!
//! Middleware: CORS (any origin, for the external chat frontend), tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::meta::root))
        .route("/chat", post(handlers::chat::chat))
        .route("/history", get(handlers::history::get_history))
        .route("/health", get(handlers::meta::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
