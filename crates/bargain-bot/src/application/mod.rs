//! Application Layer
//!
//! Use cases that orchestrate domain logic through the ports.

pub mod conversation;
pub mod offer_fetcher;

pub use conversation::ConversationController;
pub use offer_fetcher::{FetchConfig, OfferFetcher};
