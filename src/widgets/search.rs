//! Web search results and suggestions.

use tracing::warn;

use crate::client::{ApiClient, SearchResult};
use crate::currency::parse_currency_query;
use crate::timer::parse_timer_query;

pub const SEARCHING: &str = "Searching...";
pub const NO_RESULTS: &str = "No results found.";

/// Result list plus the status line shown while it is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResults {
    pub results: Vec<SearchResult>,
    pub status: &'static str,
}

impl Default for SearchResults {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            status: SEARCHING,
        }
    }
}

impl SearchResults {
    /// Fetch results for `query`; failures degrade to an empty list.
    pub async fn load(client: &ApiClient, query: &str) -> Self {
        match client.search(query).await {
            Ok(results) if !results.is_empty() => Self {
                results,
                status: SEARCHING,
            },
            Ok(_) => Self {
                results: Vec::new(),
                status: NO_RESULTS,
            },
            Err(e) => {
                warn!("Search failed: {}", e);
                Self {
                    results: Vec::new(),
                    status: NO_RESULTS,
                }
            }
        }
    }

    /// The status line shows only while there are no results and no widget
    /// (currency, timer) already answers the query.
    pub fn shows_status(&self, query: &str) -> bool {
        status_line_visible(query, &self.results)
    }
}

/// Status line rule for a result list that may be empty.
pub fn status_line_visible(query: &str, results: &[SearchResult]) -> bool {
    results.is_empty()
        && parse_currency_query(query).is_none()
        && parse_timer_query(Some(query)).is_none()
}

/// Query completions; failures yield an empty list.
pub async fn suggestions(client: &ApiClient, query: &str) -> Vec<String> {
    client.suggestions(query).await.unwrap_or_else(|e| {
        warn!("Suggestions failed: {}", e);
        Vec::new()
    })
}

/// Shorten `text` to `max` characters, appending `...` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{MockApi, MockReply};
    use serde_json::json;

    fn result() -> SearchResult {
        SearchResult {
            id: 1,
            name: "Rust".into(),
            description: "A language".into(),
            url: "https://rust-lang.org".into(),
        }
    }

    #[test]
    fn test_status_line() {
        assert!(status_line_visible("rust", &[]));
        assert!(!status_line_visible("rust", &[result()]));
        assert!(!status_line_visible("$5 to eur", &[]));
        assert!(!status_line_visible("5 minute timer", &[]));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("héllo wörld", 4), "héll...");
        assert_eq!(truncate(&"x".repeat(70), 70), "x".repeat(70));
    }

    #[tokio::test]
    async fn test_no_results() {
        let server = MockApi::start(vec![("/api/search", MockReply::Json(json!([])))]).await;
        let search = SearchResults::load(&server.client(), "zzzz").await;
        assert_eq!(search.status, NO_RESULTS);
        assert!(search.shows_status("zzzz"));
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty() {
        let server = MockApi::start(vec![("/api/search", MockReply::Status(500))]).await;
        let search = SearchResults::load(&server.client(), "rust").await;
        assert!(search.results.is_empty());
        assert_eq!(search.status, NO_RESULTS);

        let server = MockApi::start(vec![("/api/suggest", MockReply::Status(500))]).await;
        assert!(suggestions(&server.client(), "ru").await.is_empty());
    }
}
