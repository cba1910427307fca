//! Process-memory exchange history.
//!
//! Implements `HistoryStore` from `reverb-core` with a `Vec` behind a single
//! mutex. That mutex is the one serialization point for concurrent appends:
//! the log grows unboundedly, is never evicted, and resets only when the
//! process restarts.

use std::sync::Mutex;

use reverb_core::history::store::HistoryStore;
use reverb_types::error::HistoryError;
use reverb_types::exchange::Exchange;

/// In-memory `HistoryStore` backed by a mutex-guarded `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    exchanges: Mutex<Vec<Exchange>>,
}

impl InMemoryHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    async fn append(&self, exchange: Exchange) -> Result<(), HistoryError> {
        let mut exchanges = self
            .exchanges
            .lock()
            .map_err(|_| HistoryError::Storage("history lock poisoned".to_string()))?;
        exchanges.push(exchange);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Exchange>, HistoryError> {
        let exchanges = self
            .exchanges
            .lock()
            .map_err(|_| HistoryError::Storage("history lock poisoned".to_string()))?;
        Ok(exchanges.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_append_then_all_preserves_order() {
        let history = InMemoryHistory::new();
        history.append(Exchange::new("a", "Echo: a")).await.unwrap();
        history.append(Exchange::new("b", "Echo: b")).await.unwrap();

        let all = history.all().await.unwrap();
        assert_eq!(
            all,
            vec![Exchange::new("a", "Echo: a"), Exchange::new("b", "Echo: b")]
        );
    }

    #[tokio::test]
    async fn test_all_returns_snapshot() {
        let history = InMemoryHistory::new();
        history.append(Exchange::new("a", "Echo: a")).await.unwrap();

        let mut snapshot = history.all().await.unwrap();
        snapshot.clear();

        assert_eq!(history.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_history_reads_empty() {
        let history = InMemoryHistory::new();
        assert!(history.all().await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_never_lose_exchanges() {
        let history = Arc::new(InMemoryHistory::new());
        let mut handles = Vec::new();

        for task in 0..8 {
            let history = Arc::clone(&history);
            handles.push(tokio::spawn(async move {
                for i in 0..25 {
                    let text = format!("t{task}-{i}");
                    history
                        .append(Exchange::new(text.clone(), format!("Echo: {text}")))
                        .await
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let all = history.all().await.unwrap();
        assert_eq!(all.len(), 200);
        // Every exchange is whole: no interleaved partial writes.
        for exchange in &all {
            assert_eq!(exchange.bot_text, format!("Echo: {}", exchange.user_text));
        }
    }
}
