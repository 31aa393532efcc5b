//! Value Objects
//!
//! Immutable domain values without identity.

mod cursor;
mod ids;
mod nav_action;
mod query_matcher;

pub use cursor::*;
pub use ids::*;
pub use nav_action::*;
pub use query_matcher::*;
