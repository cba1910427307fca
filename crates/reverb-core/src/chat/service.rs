//! Chat service orchestrating message validation, echo derivation, and
//! history persistence.
//!
//! ChatService owns the injected `HistoryStore` for the life of the process.
//! There is deliberately no retry, caching, or eviction here: a message is
//! validated, answered, recorded, and returned.

use reverb_types::error::ChatError;
use reverb_types::exchange::Exchange;
use tracing::{debug, info};

use crate::history::store::HistoryStore;

/// Prefix prepended to every reply, standing in for real response generation.
const ECHO_PREFIX: &str = "Echo: ";

/// Handles chat messages against an injected history store.
///
/// Generic over `HistoryStore` to maintain clean architecture (reverb-core
/// never depends on reverb-infra).
pub struct ChatService<H: HistoryStore> {
    history: H,
}

impl<H: HistoryStore> ChatService<H> {
    /// Create a new chat service with the given history store.
    pub fn new(history: H) -> Self {
        Self { history }
    }

    /// Handle one inbound message.
    ///
    /// Rejects messages that are empty after trimming surrounding whitespace.
    /// On success the reply is `"Echo: "` followed by the message verbatim
    /// (the echoed text is not trimmed or normalized), and the exchange is
    /// appended to the history before the reply is returned. A failed call
    /// leaves the history untouched.
    pub async fn handle(&self, text: &str) -> Result<String, ChatError> {
        if text.trim().is_empty() {
            debug!("Rejected empty message");
            return Err(ChatError::EmptyMessage);
        }

        let response = format!("{ECHO_PREFIX}{text}");

        self.history
            .append(Exchange::new(text, response.clone()))
            .await?;
        info!(chars = text.len(), "Exchange recorded");

        Ok(response)
    }

    /// Get the full exchange history in insertion order.
    pub async fn history(&self) -> Result<Vec<Exchange>, ChatError> {
        Ok(self.history.all().await?)
    }
}
