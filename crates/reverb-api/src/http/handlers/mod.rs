//! HTTP request handlers, one module per endpoint group.

pub mod chat;
pub mod history;
pub mod meta;
