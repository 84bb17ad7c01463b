//! Records returned by the remote services.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One web search hit.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchResult {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrencyResponse {
    pub conversion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslateResponse {
    pub translated: Option<String>,
}

/// Value of an infobox field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfoValue {
    Text(String),
    List(Vec<String>),
}

/// Knowledge panel for a query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Infobox {
    pub title: Option<String>,
    pub image: Option<String>,
    /// Remaining fields in the order the service sent them.
    pub fields: Vec<(String, InfoValue)>,
}

impl Infobox {
    const TITLE: &'static str = "Title";
    const IMAGE: &'static str = "Image";

    /// Build from the service's JSON object.
    ///
    /// Non-string values are skipped, as are non-string array entries.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut infobox = Infobox::default();

        for (key, value) in object {
            let value = match value {
                Value::String(text) => InfoValue::Text(text.clone()),
                Value::Array(items) => InfoValue::List(
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect(),
                ),
                _ => continue,
            };

            match (key.as_str(), value) {
                (Self::TITLE, InfoValue::Text(title)) => infobox.title = Some(title),
                (Self::IMAGE, InfoValue::Text(image)) => infobox.image = Some(image),
                (Self::TITLE | Self::IMAGE, _) => {}
                (_, value) => infobox.fields.push((key.clone(), value)),
            }
        }

        Some(infobox)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.image.is_none() && self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infobox_reserved_keys() {
        let value = json!({
            "Title": "Rust",
            "Image": "https://example.org/rust.png",
            "Paradigm": ["imperative", "functional"],
            "Designed by": "Graydon Hoare",
            "First appeared": 2015
        });
        let infobox = Infobox::from_json(&value).unwrap();

        assert_eq!(infobox.title.as_deref(), Some("Rust"));
        assert_eq!(infobox.image.as_deref(), Some("https://example.org/rust.png"));
        assert_eq!(
            infobox.fields,
            vec![
                (
                    "Paradigm".to_string(),
                    InfoValue::List(vec!["imperative".to_string(), "functional".to_string()])
                ),
                (
                    "Designed by".to_string(),
                    InfoValue::Text("Graydon Hoare".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_infobox_requires_object() {
        assert_eq!(Infobox::from_json(&json!(["a", "b"])), None);
        assert!(Infobox::from_json(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_search_result_decodes() {
        let results: Vec<SearchResult> = serde_json::from_value(json!([
            {"id": 1, "name": "Rust", "description": "A language", "url": "https://rust-lang.org"}
        ]))
        .unwrap();
        assert_eq!(results[0].name, "Rust");
    }
}
