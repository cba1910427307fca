//! Business logic and history store trait definition for Reverb.
//!
//! This crate defines the "port" (the `HistoryStore` trait) that the
//! infrastructure layer implements. It depends only on `reverb-types` --
//! never on `reverb-infra` or any IO crate.

pub mod chat;
pub mod history;
