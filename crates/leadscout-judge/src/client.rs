//! HTTP client for the Gemini `generateContent` API.

use std::time::Duration;

use leadscout_core::config::DEFAULT_JUDGE_BASE_URL;
use reqwest::{Client, Url};

use crate::error::JudgeError;
use crate::provider::JudgeProvider;
use crate::types::{
    ApiErrorEnvelope, Content, GenerateRequest, GenerateResponse, GenerationConfig, Part,
};

/// Client for one Gemini model.
///
/// Use [`GeminiClient::new`] for production or [`GeminiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, JudgeError> {
        Self::with_base_url(api_key, model, timeout_secs, user_agent, DEFAULT_JUDGE_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`JudgeError::InvalidUrl`] if `base_url`
    /// and `model` do not form a valid endpoint.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, JudgeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let raw = format!(
            "{}/v1beta/models/{model}:generateContent",
            base_url.trim_end_matches('/')
        );
        let endpoint = Url::parse(&raw).map_err(|e| JudgeError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Sends one prompt and returns the model's text reply.
    ///
    /// Temperature is pinned to zero so repeated runs over the same leads
    /// get the same verdicts as far as the provider allows.
    ///
    /// # Errors
    ///
    /// - [`JudgeError::Http`] on network failure or timeout.
    /// - [`JudgeError::Api`] on a non-2xx response (quota, bad key, ...).
    /// - [`JudgeError::Deserialize`] if the envelope is not valid JSON.
    /// - [`JudgeError::EmptyContent`] if no candidate text came back.
    pub async fn generate(&self, prompt: &str) -> Result<String, JudgeError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature: 0.0 },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(JudgeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| JudgeError::Deserialize {
                context: "generateContent".to_string(),
                source: e,
            })?;

        let text = parsed.text().ok_or(JudgeError::EmptyContent)?;
        tracing::trace!(chars = text.len(), "judge replied");
        Ok(text)
    }
}

impl JudgeProvider for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, JudgeError> {
        self.generate(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::with_base_url(
            "k",
            "gemini-2.0-flash",
            30,
            "leadscout-test/0.1",
            "https://generativelanguage.googleapis.com/",
        )
        .expect("client construction should not fail");
        assert_eq!(
            client.endpoint.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = GeminiClient::with_base_url("k", "m", 30, "ua", "::not a url");
        assert!(matches!(result, Err(JudgeError::InvalidUrl { .. })));
    }
}
