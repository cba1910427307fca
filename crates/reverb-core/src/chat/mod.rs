//! Chat message handling for Reverb.

pub mod service;
