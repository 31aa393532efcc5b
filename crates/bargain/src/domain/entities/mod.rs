//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Listing: One priced marketplace offer
//! - SearchSession: Ranked listings plus the browsing cursor of one search
//! - ChatState: Per-chat session and last rendered view

mod chat_state;
mod listing;
mod session;

pub use chat_state::*;
pub use listing::*;
pub use session::*;
