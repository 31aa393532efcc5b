//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (marketplace, chat platform).
//!
//! Implementations of these traits live in the adapter and integration crates.

pub mod chat;
pub mod marketplace;

// Re-exports
pub use chat::*;
pub use marketplace::*;
