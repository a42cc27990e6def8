use thiserror::Error;

/// Failure of a single provider fetch. Always absorbed by the aggregator:
/// a failing provider contributes an empty result, never an error to the
/// caller.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider {provider} returned status {status}")]
    UnexpectedStatus { provider: String, status: u16 },

    #[error("invalid URL for provider {provider}: {reason}")]
    InvalidUrl { provider: String, reason: String },

    #[error("failed to parse response from {provider}: {source}")]
    Deserialize {
        provider: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum AggregatorError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
