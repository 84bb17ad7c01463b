//! Remote service adapters.
//!
//! One method per endpoint. Every call is a plain GET with query-string
//! parameters; there is no retry and no cancellation beyond dropping the
//! future. Callers that care about ordering use [`RequestSequencer`].

mod error;
#[cfg(test)]
pub(crate) mod mock;
mod sequencer;
mod types;

pub use error::ApiError;
pub use sequencer::{RequestSequencer, RequestToken};
pub use types::{InfoValue, Infobox, SearchResult};

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::currency::CurrencyQuery;
use types::{CurrencyResponse, TranslateResponse};

/// HTTP client for the search backends.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    api_base: String,
    infobox_base: String,
    search_limit: u32,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("snipr/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            infobox_base: config.infobox_base.trim_end_matches('/').to_string(),
            search_limit: config.search_limit,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| ApiError::Decode {
            endpoint,
            message: e.to_string(),
        })
    }

    /// `GET /api/search?q=`
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        let url = format!("{}/api/search", self.api_base);
        let params = [("q", query.to_string()), ("limit", self.search_limit.to_string())];
        self.get_json("search", url, &params).await
    }

    /// `GET /api/currency?amount=&from=&to=`
    ///
    /// Returns the service's display string (`"$5 = €4.61"`), or `None`
    /// when it had no answer.
    pub async fn convert_currency(&self, query: &CurrencyQuery) -> Result<Option<String>, ApiError> {
        let url = format!("{}/api/currency", self.api_base);
        let params = [
            ("amount", query.amount.to_string()),
            ("from", query.from.clone()),
            ("to", query.to.clone()),
        ];
        let response: CurrencyResponse = self.get_json("currency", url, &params).await?;
        Ok(response.conversion)
    }

    /// `GET /api/meaning?word=`
    pub async fn meanings(&self, word: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/meaning", self.api_base);
        self.get_json("meaning", url, &[("word", word.to_string())])
            .await
    }

    /// `GET /api/translate?text=&to=&from=`
    pub async fn translate(&self, text: &str, to: &str, from: &str) -> Result<Option<String>, ApiError> {
        let url = format!("{}/api/translate", self.api_base);
        let params = [
            ("text", text.to_string()),
            ("to", to.to_string()),
            ("from", from.to_string()),
        ];
        let response: TranslateResponse = self.get_json("translate", url, &params).await?;
        Ok(response.translated)
    }

    /// Audio source URL for speaking `text`.
    pub fn tts_url(&self, text: &str) -> String {
        format!("{}/api/tts?text={}", self.api_base, urlencoding::encode(text))
    }

    /// Download the audio stream for `text`.
    pub async fn tts_audio(&self, text: &str) -> Result<Vec<u8>, ApiError> {
        let endpoint = "tts";
        let url = self.tts_url(text);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;
        Ok(bytes.to_vec())
    }

    /// `GET /api/suggest?q=`
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/suggest", self.api_base);
        self.get_json("suggest", url, &[("q", query.to_string())])
            .await
    }

    /// `GET /api/infobox?query=` on the infobox host.
    ///
    /// A 404 means there is no panel for the query and yields `Ok(None)`.
    pub async fn infobox(&self, query: &str) -> Result<Option<Infobox>, ApiError> {
        let url = format!("{}/api/infobox", self.infobox_base);
        let value: Value = match self
            .get_json("infobox", url, &[("query", query.to_string())])
            .await
        {
            Ok(value) => value,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        match Infobox::from_json(&value) {
            Some(infobox) => Ok(Some(infobox)),
            None => Err(ApiError::Decode {
                endpoint: "infobox",
                message: "expected a JSON object".to_string(),
            }),
        }
    }
}
