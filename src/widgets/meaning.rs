//! Dictionary card.

use tracing::warn;

use crate::client::ApiClient;
use crate::word::clean_query;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordMeaningCard {
    pub word: String,
    pub meanings: Vec<String>,
}

impl WordMeaningCard {
    pub fn is_visible(&self) -> bool {
        !self.meanings.is_empty()
    }

    /// Look up the word left after stripping the query's boilerplate.
    pub async fn load(client: &ApiClient, query: &str) -> Self {
        let word = clean_query(query);
        if word.is_empty() {
            return Self::default();
        }

        let meanings = client.meanings(&word).await.unwrap_or_else(|e| {
            warn!("Meaning lookup for '{}' failed: {}", word, e);
            Vec::new()
        });

        Self { word, meanings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{MockApi, MockReply};
    use serde_json::json;

    #[tokio::test]
    async fn test_looks_up_cleaned_word() {
        let server = MockApi::start(vec![(
            "/api/meaning",
            MockReply::Json(json!(["existing everywhere"])),
        )])
        .await;

        let card = WordMeaningCard::load(&server.client(), "what is the meaning of ubiquitous").await;
        assert!(card.is_visible());
        assert_eq!(card.word, "ubiquitous");
        assert_eq!(server.requests(), vec!["/api/meaning?word=ubiquitous"]);
    }

    #[tokio::test]
    async fn test_failure_hides_card() {
        let server = MockApi::start(vec![("/api/meaning", MockReply::Status(500))]).await;
        let card = WordMeaningCard::load(&server.client(), "define zzz").await;
        assert!(!card.is_visible());
    }

    #[tokio::test]
    async fn test_boilerplate_only_skips_request() {
        let server = MockApi::start(vec![]).await;
        let card = WordMeaningCard::load(&server.client(), "define the").await;
        assert!(!card.is_visible());
        assert!(server.requests().is_empty());
    }
}
