//! Translation panel with read-aloud.

use tracing::warn;

use crate::client::ApiClient;
use crate::translate::{AUTO, DEFAULT_TARGET, parse_translate_query};

pub const NO_TRANSLATION: &str = "No translation found.";
pub const TRANSLATION_FAILED: &str = "Translation failed.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatePanel {
    pub from: String,
    pub to: String,
    pub text: String,
    /// Last translation (or failure message), if any.
    pub result: Option<String>,
}

impl Default for TranslatePanel {
    fn default() -> Self {
        Self {
            from: AUTO.to_string(),
            to: DEFAULT_TARGET.to_string(),
            text: String::new(),
            result: None,
        }
    }
}

impl TranslatePanel {
    /// Pre-fill the panel from `translate <text> [to <language>]`.
    pub fn from_query(query: &str) -> Self {
        let mut panel = Self::default();
        if let Some((text, target)) = parse_translate_query(query) {
            panel.text = text;
            if let Some(target) = target {
                panel.to = target.to_string();
            }
        }
        panel
    }

    /// The translate button is disabled for blank input.
    pub fn can_translate(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub async fn translate(&mut self, client: &ApiClient) {
        if !self.can_translate() {
            return;
        }
        self.result = None;

        let result = match client.translate(&self.text, &self.to, &self.from).await {
            Ok(Some(translated)) if !translated.is_empty() => translated,
            Ok(_) => NO_TRANSLATION.to_string(),
            Err(e) => {
                warn!("Translation failed: {}", e);
                TRANSLATION_FAILED.to_string()
            }
        };
        self.result = Some(result);
    }

    /// Audio URL for reading the translation aloud.
    pub fn speech_url(&self, client: &ApiClient) -> Option<String> {
        self.result.as_deref().map(|text| client.tts_url(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{MockApi, MockReply};
    use serde_json::json;

    #[test]
    fn test_from_query() {
        let panel = TranslatePanel::from_query("translate bonjour to german");
        assert_eq!(panel.text, "bonjour");
        assert_eq!(panel.to, "de");
        assert_eq!(panel.from, "auto");

        let panel = TranslatePanel::from_query("translate");
        assert!(!panel.can_translate());
        assert_eq!(panel.to, "en");
    }

    #[tokio::test]
    async fn test_translate() {
        let server = MockApi::start(vec![(
            "/api/translate",
            MockReply::Json(json!({"translated": "good morning"})),
        )])
        .await;
        let client = server.client();

        let mut panel = TranslatePanel::from_query("translate buenos dias");
        panel.translate(&client).await;
        assert_eq!(panel.result.as_deref(), Some("good morning"));
        assert!(panel.speech_url(&client).unwrap().ends_with("text=good%20morning"));
    }

    #[tokio::test]
    async fn test_empty_answer() {
        let server = MockApi::start(vec![("/api/translate", MockReply::Json(json!({})))]).await;
        let mut panel = TranslatePanel::from_query("translate xyz");
        panel.translate(&server.client()).await;
        assert_eq!(panel.result.as_deref(), Some(NO_TRANSLATION));
    }

    #[tokio::test]
    async fn test_failure() {
        let server = MockApi::start(vec![("/api/translate", MockReply::Status(500))]).await;
        let mut panel = TranslatePanel::from_query("translate xyz");
        panel.translate(&server.client()).await;
        assert_eq!(panel.result.as_deref(), Some(TRANSLATION_FAILED));
    }

    #[tokio::test]
    async fn test_blank_text_sends_nothing() {
        let server = MockApi::start(vec![]).await;
        let mut panel = TranslatePanel::default();
        panel.translate(&server.client()).await;
        assert_eq!(panel.result, None);
        assert!(server.requests().is_empty());
    }
}
