use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API returned status {status} for query \"{query}\"")]
    UnexpectedStatus { status: u16, query: String },

    #[error("failed to parse search response for \"{context}\": {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
