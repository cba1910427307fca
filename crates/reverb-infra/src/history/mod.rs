//! History store implementations.

pub mod memory;

pub use memory::InMemoryHistory;
