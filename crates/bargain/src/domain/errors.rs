//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Marketplace transport failure, timeout or malformed response body
    #[error("Network error: {0}")]
    Network(String),

    /// Nothing left to rank
    #[error("Empty result: {0}")]
    EmptyResult(String),

    /// Chat transport failed to deliver, edit or delete a message
    #[error("Chat transport error: {0}")]
    Transport(String),
}

impl DomainError {
    /// Whether the error means "nothing to show" rather than a fault
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult(_))
    }
}
