//! Listing Entity
//!
//! A single marketplace offer that survived relevance and price filtering.

use serde::{Deserialize, Serialize};

/// A priced marketplace offer
///
/// Fields are private so a listing cannot be mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    url: String,
    title: String,
    price: f64,
}

impl Listing {
    pub fn new(url: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            price,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// True for finite prices above zero
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }

    /// Render the listing as chat text
    pub fn render(&self) -> String {
        format!(
            "Title: {}\nURL: {}\nPrice: {}",
            self.title, self.url, self.price
        )
    }
}
