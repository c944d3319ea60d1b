//! Serper search API request and response types.

use serde::{Deserialize, Serialize};

/// Body of a `POST /search` request.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub q: &'a str,
    pub num: u32,
}

/// Top-level search response.
///
/// Serper returns several result groups (`knowledgeGraph`, `peopleAlsoAsk`,
/// ...); only `organic` carries job postings. A missing `organic` key means
/// no results.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// One organic search hit. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
