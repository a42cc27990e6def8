use thiserror::Error;

use jobpulse_search::SearchError;

#[derive(Debug, Error)]
pub enum IntelError {
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// Every sub-query of a report failed. A partial failure never produces
    /// this: any succeeding sub-query yields a report with defaults in the
    /// failed slots.
    #[error("search capability unavailable: {0}")]
    SearchUnavailable(String),
}
