//! OLX Marketplace Implementation
//!
//! Fetches offer pages from the OLX public offers API using reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use bargain::{DomainError, MarketplaceSearch, OfferParam, RawOffer};

pub const DEFAULT_BASE_URL: &str = "https://www.olx.ua/api/v1";
const USER_AGENT: &str = concat!("bargain-bot/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of MarketplaceSearch for OLX
#[derive(Clone)]
pub struct OlxMarketplace {
    client: Client,
    base_url: String,
}

impl OlxMarketplace {
    /// Create a marketplace client; every page request is bounded by `page_timeout`
    pub fn new(base_url: &str, page_timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(page_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MarketplaceSearch for OlxMarketplace {
    async fn fetch_page(
        &self,
        query: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Option<Vec<RawOffer>>, DomainError> {
        let url = format!("{}/offers", self.base_url);
        tracing::debug!(offset = %offset, limit = %limit, query = %query, "Fetching offers page");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
                ("query", query.to_string()),
                ("filter_refiners", "spell_checker".to_string()),
                ("suggest_filters", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    DomainError::Network(format!("Offers page at offset {offset} timed out"))
                } else {
                    DomainError::Network(format!("Request failed: {err}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|err| DomainError::Network(format!("Failed to read response: {err}")))?;

        parse_page(&body)
    }
}

// ============================================
// Helper Functions
// ============================================

/// Parse one offers page
///
/// The body must be a JSON object with a `data` field. A `data` that is
/// null or not an array means there are no more pages.
fn parse_page(body: &str) -> Result<Option<Vec<RawOffer>>, DomainError> {
    let root: Value = serde_json::from_str(body)
        .map_err(|err| DomainError::Network(format!("Invalid JSON in offers page: {err}")))?;

    let root = root
        .as_object()
        .ok_or_else(|| DomainError::Network("Offers page is not a JSON object".into()))?;

    let data = root
        .get("data")
        .ok_or_else(|| DomainError::Network("Offers page has no `data` field".into()))?;

    let Some(records) = data.as_array() else {
        return Ok(None);
    };

    Ok(Some(records.iter().map(parse_offer).collect()))
}

fn parse_offer(record: &Value) -> RawOffer {
    let url = record.get("url").and_then(|v| v.as_str()).map(str::to_string);
    let title = record
        .get("title")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let params = record
        .get("params")
        .and_then(|p| p.as_array())
        .map(|params| params.iter().filter_map(parse_param).collect())
        .unwrap_or_default();

    RawOffer { url, title, params }
}

fn parse_param(param: &Value) -> Option<OfferParam> {
    let key = param.get("key")?.as_str()?;
    let value = param
        .get("value")
        .and_then(|v| v.get("value"))
        .and_then(|v| v.as_f64());

    Some(OfferParam::new(key, value))
}

fn map_http_error(status: StatusCode, body: String) -> DomainError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("detail").or_else(|| err.get("title")))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    DomainError::Network(format!("Marketplace API error ({}): {}", status.as_u16(), message))
}
