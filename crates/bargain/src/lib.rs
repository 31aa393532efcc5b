//! Bargain Domain Library
//!
//! Core domain types and interfaces for the Bargain marketplace search bot.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Listing, SearchSession, ChatState)
//!   - `value_objects/`: Immutable value types (QueryMatcher, PaginationCursor, NavAction)
//!   - `services/`: Pure domain services (OfferRanker)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `marketplace`: Paginated offer search
//!   - `chat`: Chat transport and inbound events
//!
//! # Usage
//!
//! ```rust,ignore
//! use bargain::{Listing, OfferRanker, QueryMatcher};
//!
//! let matcher = QueryMatcher::build("iphone 13");
//! let ranked = OfferRanker::rank(listings)?;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ChatId, ChatState, DomainError, Listing, MessageRef, NavAction, OfferRanker,
    PaginationCursor, QueryMatcher, SearchSession,
};
pub use ports::{
    // Chat transport
    ChatEvent,
    ChatEventHandler,
    ChatTransport,
    // Marketplace
    MarketplaceSearch,
    OfferParam,
    RawOffer,
    Reply,
};
