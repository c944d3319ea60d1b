use thiserror::Error;

/// Transport-level errors from the judge provider client.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("judge API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response envelope could not be deserialized.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider returned no candidate text (e.g. a blocked prompt).
    #[error("judge returned empty content")]
    EmptyContent,

    /// The configured judge endpoint is not a valid URL.
    #[error("invalid judge URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
