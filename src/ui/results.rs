//! Search result list rendering.

use crate::widgets::{SearchResults, truncate};

/// URLs longer than this are cut for display.
pub const URL_DISPLAY_LEN: usize = 70;
/// Descriptions longer than this are cut for display.
pub const DESCRIPTION_DISPLAY_LEN: usize = 100;

/// Render the result list, or the status line when it applies.
pub fn render_results(search: &SearchResults, query: &str) -> String {
    if search.results.is_empty() {
        return if search.shows_status(query) {
            format!("{}\n", search.status)
        } else {
            String::new()
        };
    }

    let mut out = String::from("We found the following results:\n\n");
    for result in &search.results {
        out.push_str(&format!("  {}\n", truncate(&result.url, URL_DISPLAY_LEN)));
        out.push_str(&format!("  {}\n", result.name));
        out.push_str(&format!(
            "  {}\n\n",
            truncate(&result.description, DESCRIPTION_DISPLAY_LEN)
        ));
    }
    out
}

pub fn render_suggestions(suggestions: &[String]) -> String {
    suggestions.iter().map(|s| format!("  {s}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SearchResult;
    use crate::widgets::NO_RESULTS;

    #[test]
    fn test_truncates_for_display() {
        let search = SearchResults {
            results: vec![SearchResult {
                id: 1,
                name: "Long".into(),
                description: "d".repeat(150),
                url: format!("https://example.org/{}", "p".repeat(80)),
            }],
            status: NO_RESULTS,
        };
        let text = render_results(&search, "long");
        assert!(text.contains(&format!("{}...", "d".repeat(100))));
        assert!(!text.contains(&"d".repeat(101)));
        assert!(!text.contains(&"p".repeat(80)));
    }

    #[test]
    fn test_status_line_rules() {
        let empty = SearchResults {
            results: Vec::new(),
            status: NO_RESULTS,
        };
        assert_eq!(render_results(&empty, "zzzz"), "No results found.\n");
        assert_eq!(render_results(&empty, "$5 to eur"), "");
    }
}
