//! Error types for Brave Search API access

/// Result type for search operations.
///
/// Convenience alias using [`SearchError`] as the error type.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error type for every failure a search can hit.
///
/// The `Display` output of each variant is the message shown to tool callers,
/// so it is kept short and stable.
///
/// # Error Categories
///
/// - **Rate limiting**: the local [`RateGate`](crate::rate_gate::RateGate) refused the call
/// - **Upstream**: the API answered with a non-200 status
/// - **Transport**: network, DNS or timeout failures from the HTTP client
/// - **Decode**: the API answered 200 but the body was not the expected JSON
/// - **Configuration**: missing or invalid startup settings
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Per-second or per-month quota exhausted
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Non-200 response from the Brave API
    #[error("Brave API error: {status} {reason}\n{body}")]
    Upstream {
        status: u16,
        reason: String,
        body: String,
    },

    /// Network failure from the HTTP client
    #[error("HTTP request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// Response body was not valid JSON for the endpoint
    #[error("Invalid response from Brave API: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    /// Missing or invalid configuration
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl SearchError {
    /// Create a configuration error with a custom message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Build an upstream error from a status code and the raw response body.
    ///
    /// The reason phrase is the canonical one for the status, or empty when the
    /// status has none.
    pub fn upstream(status: reqwest::StatusCode, body: impl Into<String>) -> Self {
        Self::Upstream {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.into(),
        }
    }

    /// Whether this error was raised locally by the rate gate.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitExceeded)
    }
}
