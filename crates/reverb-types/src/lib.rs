//! Shared domain types for Reverb.
//!
//! This crate contains the core domain types used across the Reverb service:
//! Exchange, ServerConfig, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod exchange;
