//! Gemini `generateContent` request and response types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub role: &'a str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerationConfig {
    pub temperature: f32,
}

/// Response envelope. Candidates may be missing entirely when the prompt
/// was blocked by safety filters.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate's parts, or `None` when the
    /// response carries no text at all.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"match\": " }, { "text": "false}" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"match\": false}"));
    }

    #[test]
    fn text_is_none_without_candidates() {
        let response: GenerateResponse =
            serde_json::from_value(serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
                .unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn text_is_none_for_whitespace_only() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "  \n" }] } }]
        }))
        .unwrap();
        assert!(response.text().is_none());
    }
}
