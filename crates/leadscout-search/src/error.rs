use thiserror::Error;

/// Errors returned by the search provider client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No API key was configured, so no request was sent.
    #[error("search API key is not configured")]
    MissingApiKey,

    /// The configured search endpoint is not a valid URL.
    #[error("invalid search URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The provider answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from search provider: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
