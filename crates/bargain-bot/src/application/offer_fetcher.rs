//! Offer Fetcher (Use Case)
//!
//! Pulls offer pages from the marketplace until an empty page and keeps
//! the relevant, priced ones.

use std::sync::Arc;

use bargain::{DomainError, Listing, MarketplaceSearch, QueryMatcher, RawOffer};

/// Pagination settings
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Offers requested per page
    pub page_size: usize,
    /// Upper bound on pages pulled for one search
    pub max_pages: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            max_pages: 50,
        }
    }
}

/// Application service that turns a query into candidate listings
pub struct OfferFetcher<M: MarketplaceSearch> {
    marketplace: Arc<M>,
    config: FetchConfig,
}

impl<M: MarketplaceSearch> OfferFetcher<M> {
    pub fn new(marketplace: Arc<M>, config: FetchConfig) -> Self {
        Self {
            marketplace,
            config,
        }
    }

    /// Fetch every page for `query`, one at a time
    ///
    /// Any page failure aborts the whole fetch; nothing gathered before
    /// the failure is returned.
    pub async fn fetch(&self, query: &str) -> Result<Vec<Listing>, DomainError> {
        let matcher = QueryMatcher::build(query);
        let page_size = self.config.page_size;
        let mut listings = Vec::new();
        let mut page = 0;

        loop {
            if page >= self.config.max_pages {
                tracing::warn!(
                    query = %query,
                    max_pages = self.config.max_pages,
                    "Page cap reached, stopping pagination"
                );
                break;
            }

            let records = match self
                .marketplace
                .fetch_page(query, page * page_size, page_size)
                .await?
            {
                Some(records) if !records.is_empty() => records,
                _ => break,
            };

            let before = listings.len();
            listings.extend(records.iter().filter_map(|r| to_listing(r, &matcher)));

            tracing::debug!(
                page = page,
                records = records.len(),
                kept = listings.len() - before,
                "Processed offers page"
            );

            page += 1;
        }

        tracing::info!(
            query = %query,
            pages = page,
            listings = listings.len(),
            "Fetched offers"
        );

        Ok(listings)
    }
}

/// Keep a record only if its title matches and it carries a positive price
fn to_listing(record: &RawOffer, matcher: &QueryMatcher) -> Option<Listing> {
    let (Some(url), Some(title)) = (record.url.as_deref(), record.title.as_deref()) else {
        tracing::debug!("Skipping offer record without url or title");
        return None;
    };

    if !matcher.matches(title) {
        return None;
    }

    let price = record.first_positive_price()?;
    Some(Listing::new(url, title, price))
}
