use thiserror::Error;

/// Errors from history store operations (used by trait definitions in reverb-core).
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from handling a chat message.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("history error: {0}")]
    History(#[from] HistoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::EmptyMessage;
        assert_eq!(err.to_string(), "message cannot be empty");
    }

    #[test]
    fn test_history_error_display() {
        let err = HistoryError::Storage("lock poisoned".to_string());
        assert_eq!(err.to_string(), "storage error: lock poisoned");
    }

    #[test]
    fn test_history_error_converts_to_chat_error() {
        let err: ChatError = HistoryError::Storage("boom".to_string()).into();
        assert!(matches!(err, ChatError::History(_)));
    }
}
