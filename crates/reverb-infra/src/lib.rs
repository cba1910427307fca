//! Infrastructure layer for Reverb.
//!
//! Contains the implementation of the `HistoryStore` trait defined in
//! `reverb-core` (process-memory storage) and the server config loader.

pub mod config;
pub mod history;
