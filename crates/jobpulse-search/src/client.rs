//! HTTP client for the Serper search API.
//!
//! Sends JSON POST requests with an `X-API-KEY` header and parses the
//! `organic` result list into [`SearchSnippet`]s. A response without an
//! `organic` field is a valid zero-result answer, not an error.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use jobpulse_core::SearchSnippet;

use crate::error::SearchError;

const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

/// Client for a Serper-style web-search API.
///
/// Use [`SearchClient::new`] for production or
/// [`SearchClient::with_base_url`] to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Serper response envelope. Only the organic results are consumed.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}

impl SearchClient {
    /// Creates a client pointed at the production search API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("jobpulse/0.1 (market-intelligence)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Runs one web search and returns the organic results as snippets.
    ///
    /// `num_results` bounds the result count server-side; `country` is the
    /// two-letter geo hint (e.g. `"us"`).
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or timeout.
    /// - [`SearchError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SearchError::Deserialize`] if the body is not the expected shape.
    pub async fn search(
        &self,
        query: &str,
        num_results: u32,
        country: &str,
    ) -> Result<Vec<SearchSnippet>, SearchError> {
        let url = format!("{}/search", self.base_url);
        let payload = serde_json::json!({
            "q": query,
            "num": num_results,
            "gl": country,
        });

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                query: query.to_owned(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(query={query})"),
                source: e,
            })?;

        tracing::debug!(
            query,
            results = parsed.organic.len(),
            "search query completed"
        );

        Ok(parsed
            .organic
            .into_iter()
            .map(|r| SearchSnippet {
                title: r.title,
                body_text: r.snippet,
                source_url: r.link,
            })
            .collect())
    }
}
