//! OfferRanker - Below-average price ranking

use crate::domain::entities::Listing;
use crate::domain::errors::DomainError;

/// Keeps listings priced strictly below the mean and orders them by price
pub struct OfferRanker;

impl OfferRanker {
    /// Arithmetic mean of all valid prices, `None` when there are none
    pub fn mean_price(listings: &[Listing]) -> Option<f64> {
        let (sum, count) = listings
            .iter()
            .filter(|l| l.has_valid_price())
            .fold((0.0, 0usize), |(sum, count), l| (sum + l.price(), count + 1));

        (count > 0).then(|| sum / count as f64)
    }

    /// Rank listings below the mean price, cheapest first
    ///
    /// Fails with `EmptyResult` when no listing carries a valid price.
    /// An empty `Ok` means nothing is strictly below the mean.
    pub fn rank(listings: Vec<Listing>) -> Result<Vec<Listing>, DomainError> {
        let mean = Self::mean_price(&listings)
            .ok_or_else(|| DomainError::EmptyResult("no valid prices".into()))?;

        let mut below: Vec<Listing> = listings
            .into_iter()
            .filter(|l| l.has_valid_price() && l.price() < mean)
            .collect();

        // Stable: equal prices keep their input order
        below.sort_by(|a, b| a.price().total_cmp(&b.price()));

        tracing::debug!(mean = %mean, retained = below.len(), "Ranked listings below average");

        Ok(below)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, price: f64) -> Listing {
        Listing::new(format!("https://example.com/{title}"), title, price)
    }

    fn prices(listings: &[Listing]) -> Vec<f64> {
        listings.iter().map(|l| l.price()).collect()
    }

    #[test]
    fn test_mean_is_strict_threshold() {
        let ranked = OfferRanker::rank(vec![
            listing("a", 100.0),
            listing("b", 200.0),
            listing("c", 300.0),
        ])
        .unwrap();
        assert_eq!(prices(&ranked), vec![100.0]);
    }

    #[test]
    fn test_sorted_ascending() {
        let ranked = OfferRanker::rank(vec![
            listing("a", 50.0),
            listing("b", 1000.0),
            listing("c", 10.0),
            listing("d", 30.0),
        ])
        .unwrap();
        // mean = 272.5
        assert_eq!(prices(&ranked), vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = OfferRanker::rank(vec![
            listing("first", 10.0),
            listing("pricey", 500.0),
            listing("second", 10.0),
            listing("cheap", 5.0),
            listing("third", 10.0),
        ])
        .unwrap();
        let titles: Vec<&str> = ranked.iter().map(|l| l.title()).collect();
        assert_eq!(titles, vec!["cheap", "first", "second", "third"]);
    }

    #[test]
    fn test_all_equal_prices_yield_empty() {
        let ranked = OfferRanker::rank(vec![listing("a", 70.0), listing("b", 70.0)]).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_single_listing_is_not_below_itself() {
        let ranked = OfferRanker::rank(vec![listing("only", 42.0)]).unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        let err = OfferRanker::rank(Vec::new()).unwrap_err();
        assert!(err.is_empty_result());
    }

    #[test]
    fn test_invalid_prices_are_excluded() {
        let ranked = OfferRanker::rank(vec![
            listing("zero", 0.0),
            listing("negative", -100.0),
            listing("a", 100.0),
            listing("b", 300.0),
        ])
        .unwrap();
        // mean over valid prices only = 200
        assert_eq!(prices(&ranked), vec![100.0]);
    }

    #[test]
    fn test_only_invalid_prices_is_empty_result() {
        let err = OfferRanker::rank(vec![listing("zero", 0.0), listing("neg", -1.0)]).unwrap_err();
        assert!(matches!(err, DomainError::EmptyResult(_)));
    }

    #[test]
    fn test_result_is_strictly_below_mean() {
        let input: Vec<Listing> = (1..=40)
            .map(|i| listing(&format!("item{i}"), ((i * 37) % 23 + 1) as f64))
            .collect();
        let mean = OfferRanker::mean_price(&input).unwrap();
        let ranked = OfferRanker::rank(input).unwrap();

        assert!(!ranked.is_empty());
        assert!(ranked.iter().all(|l| l.price() < mean));
        assert!(ranked.windows(2).all(|w| w[0].price() <= w[1].price()));
    }
}
