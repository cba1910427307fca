//! Application state wiring the chat service to its store.
//!
//! AppState holds the concrete service instance used by the REST API.
//! The service is generic over the history store trait, but AppState pins
//! it to the in-memory infra implementation.

use std::sync::Arc;

use reverb_core::chat::service::ChatService;
use reverb_infra::history::InMemoryHistory;

/// Concrete type alias for the service generic pinned to the infra implementation.
pub type ConcreteChatService = ChatService<InMemoryHistory>;

/// Shared application state holding the chat service.
///
/// The history store lives inside the service for the duration of the
/// process; cloning the state shares it.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize the application state with an empty history.
    pub fn new() -> Self {
        Self {
            chat_service: Arc::new(ChatService::new(InMemoryHistory::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
