//! Request/query types (Deserialize)

use hubstats_core::{DEFAULT_LISTING_LIMIT, MAX_LISTING_LIMIT};
use serde::Deserialize;

const fn default_limit() -> usize {
    DEFAULT_LISTING_LIMIT
}

fn default_period() -> String {
    "7d".to_owned()
}

#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl ListingQuery {
    /// Cap limit to prevent DoS via unbounded queries.
    pub fn capped_limit(&self) -> usize {
        self.limit.min(MAX_LISTING_LIMIT)
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeSeriesQuery {
    #[serde(default = "default_period")]
    pub period: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_query_default_limit() {
        let q: ListingQuery = serde_json::from_value(json!({})).expect("valid ListingQuery");
        assert_eq!(q.limit, 50);
    }

    #[test]
    fn test_listing_query_capped_limit() {
        let q: ListingQuery =
            serde_json::from_value(json!({"limit": 5000})).expect("valid ListingQuery");
        assert_eq!(q.capped_limit(), 1000);
    }

    #[test]
    fn test_listing_query_normal_limit() {
        let q: ListingQuery =
            serde_json::from_value(json!({"limit": 25})).expect("valid ListingQuery");
        assert_eq!(q.capped_limit(), 25);
    }

    #[test]
    fn test_time_series_query_default_period() {
        let q: TimeSeriesQuery = serde_json::from_value(json!({})).expect("valid TimeSeriesQuery");
        assert_eq!(q.period, "7d");
    }
}
