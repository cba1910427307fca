//! HTTP/REST API layer for Reverb.
//!
//! Axum-based REST API exposing the chat and history endpoints with
//! permissive CORS for the external chat frontend.

pub mod error;
pub mod handlers;
pub mod router;
