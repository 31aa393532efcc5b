//! Domain Services
//!
//! Stateless domain logic that works across entities.

mod ranker;

pub use ranker::*;
