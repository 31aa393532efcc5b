//! SearchSession Entity
//!
//! The ranked result of one search in one chat together with its cursor.

use chrono::{DateTime, Utc};

use super::listing::Listing;
use crate::domain::value_objects::{NavAction, PaginationCursor};

/// Active browsing session
///
/// Always holds at least one listing, so `current()` is total.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    listings: Vec<Listing>,
    cursor: PaginationCursor,
    started_at: DateTime<Utc>,
}

impl SearchSession {
    /// Start a session over a ranked sequence. Returns `None` when there is nothing to browse.
    pub fn start(query: impl Into<String>, listings: Vec<Listing>) -> Option<Self> {
        let cursor = PaginationCursor::new(listings.len())?;
        Some(Self {
            query: query.into(),
            listings,
            cursor,
            started_at: Utc::now(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Listing under the cursor
    pub fn current(&self) -> &Listing {
        &self.listings[self.cursor.index()]
    }

    /// Apply a navigation action to the cursor
    pub fn navigate(&mut self, action: NavAction) {
        match action {
            NavAction::Next => self.cursor.next(),
            NavAction::Previous => self.cursor.previous(),
        }
    }

    /// Navigation buttons valid at the current cursor position
    pub fn buttons(&self) -> Vec<NavAction> {
        let mut buttons = Vec::with_capacity(2);
        if self.cursor.has_previous() {
            buttons.push(NavAction::Previous);
        }
        if self.cursor.has_next() {
            buttons.push(NavAction::Next);
        }
        buttons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listings(prices: &[f64]) -> Vec<Listing> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| Listing::new(format!("https://example.com/{i}"), format!("item {i}"), *p))
            .collect()
    }

    #[test]
    fn test_empty_session_is_not_started() {
        assert!(SearchSession::start("query", Vec::new()).is_none());
    }

    #[test]
    fn test_navigation_and_buttons() {
        let mut session = SearchSession::start("item", listings(&[10.0, 20.0, 30.0])).unwrap();
        assert_eq!(session.cursor().index(), 0);
        assert_eq!(session.buttons(), vec![NavAction::Next]);

        session.navigate(NavAction::Next);
        assert_eq!(session.cursor().index(), 1);
        assert_eq!(session.current().price(), 20.0);
        assert_eq!(session.buttons(), vec![NavAction::Previous, NavAction::Next]);

        session.navigate(NavAction::Next);
        session.navigate(NavAction::Next);
        assert_eq!(session.cursor().index(), 2);
        assert_eq!(session.buttons(), vec![NavAction::Previous]);
    }

    #[test]
    fn test_single_listing_has_no_buttons() {
        let session = SearchSession::start("item", listings(&[10.0])).unwrap();
        assert!(session.buttons().is_empty());
    }
}
