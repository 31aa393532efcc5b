//! Marketplace Search Port
//!
//! Abstract interface for a paginated classifieds search endpoint.

use async_trait::async_trait;

use crate::domain::errors::DomainError;

/// One `params` entry of an offer record
#[derive(Debug, Clone, PartialEq)]
pub struct OfferParam {
    pub key: String,
    /// Numeric `value.value`, if the entry carries one
    pub value: Option<f64>,
}

impl OfferParam {
    pub fn new(key: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An offer record as returned by the marketplace, before filtering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOffer {
    pub url: Option<String>,
    pub title: Option<String>,
    pub params: Vec<OfferParam>,
}

impl RawOffer {
    /// First `price` parameter with a positive value, in list order
    pub fn first_positive_price(&self) -> Option<f64> {
        self.params
            .iter()
            .filter(|p| p.key == "price")
            .filter_map(|p| p.value)
            .find(|v| v.is_finite() && *v > 0.0)
    }
}

/// Service interface for the marketplace offer search
#[async_trait]
pub trait MarketplaceSearch: Send + Sync {
    /// Fetch one page of offers matching `query`
    ///
    /// `Ok(None)` or an empty page marks the end of results.
    async fn fetch_page(
        &self,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Option<Vec<RawOffer>>, DomainError>;
}
