//! The exchange type recorded for every handled chat message.

use serde::{Deserialize, Serialize};

/// One user message paired with the reply generated for it.
///
/// Exchanges are created atomically when a message is handled and are never
/// mutated afterwards. Serialized on the wire as `{"user": ..., "bot": ...}`,
/// the shape the history endpoint exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// The text the user sent, verbatim.
    #[serde(rename = "user")]
    pub user_text: String,
    /// The reply that was returned for it.
    #[serde(rename = "bot")]
    pub bot_text: String,
}

impl Exchange {
    pub fn new(user_text: impl Into<String>, bot_text: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            bot_text: bot_text.into(),
        }
    }
}
