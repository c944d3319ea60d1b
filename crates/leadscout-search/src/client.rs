//! HTTP client for the Serper Google-search API.
//!
//! Wraps `reqwest` with Serper-specific authentication, status handling,
//! and typed response deserialization.

use std::time::Duration;

use leadscout_core::config::DEFAULT_SEARCH_URL;
use leadscout_core::RawLead;
use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::normalize::normalize_result;
use crate::source::SearchProvider;
use crate::types::{SearchRequest, SearchResponse};

/// Longest error body kept in [`SearchError::UnexpectedStatus`].
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Client for the Serper search endpoint.
///
/// Use [`SerperClient::new`] for production or [`SerperClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SerperClient {
    client: Client,
    api_key: Option<String>,
    search_url: Url,
}

impl SerperClient {
    /// Creates a new client pointed at the production Serper API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_SEARCH_URL)
    }

    /// Creates a new client with a custom search URL (for testing with wiremock).
    ///
    /// `api_key` may be `None`; every search then fails with
    /// [`SearchError::MissingApiKey`] without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidUrl`] if `search_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
        search_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let search_url = Url::parse(search_url).map_err(|e| SearchError::InvalidUrl {
            url: search_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            search_url,
        })
    }

    /// Runs one search and returns the normalized organic results.
    ///
    /// # Errors
    ///
    /// - [`SearchError::MissingApiKey`] if no key was configured.
    /// - [`SearchError::Http`] on network failure or timeout.
    /// - [`SearchError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON shape.
    pub async fn search(&self, query: &str, num: u32) -> Result<Vec<RawLead>, SearchError> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::MissingApiKey)?;

        let response = self
            .client
            .post(self.search_url.clone())
            .header("X-API-KEY", api_key)
            .json(&SearchRequest { q: query, num })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        Ok(parsed.organic.into_iter().map(normalize_result).collect())
    }
}

impl SearchProvider for SerperClient {
    async fn search(&self, query: &str, num: u32) -> Result<Vec<RawLead>, SearchError> {
        SerperClient::search(self, query, num).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
