//! Exchange history persistence abstraction for Reverb.
//!
//! This module defines the `HistoryStore` trait that the infrastructure
//! layer implements for appending and reading the exchange log.

pub mod store;
