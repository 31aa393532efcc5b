//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod olx;

// Re-exports
pub use olx::OlxMarketplace;
