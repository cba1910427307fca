//! HistoryStore trait definition.
//!
//! Provides append and read access to the ordered exchange log.

use reverb_types::error::HistoryError;
use reverb_types::exchange::Exchange;

/// Store trait for the ordered log of exchanges.
///
/// Implementations live in reverb-infra (e.g., `InMemoryHistory`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
///
/// Ordering is insertion order and is significant: `all` must return
/// exchanges in the order their `append` calls completed. Implementations
/// must serialize concurrent appends behind a single mutual-exclusion
/// point so partial exchanges can never interleave.
pub trait HistoryStore: Send + Sync {
    /// Append an exchange to the end of the log.
    fn append(
        &self,
        exchange: Exchange,
    ) -> impl std::future::Future<Output = Result<(), HistoryError>> + Send;

    /// Get the full ordered log, by value.
    ///
    /// Callers receive a snapshot; mutating it does not affect the store.
    fn all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Exchange>, HistoryError>> + Send;
}
