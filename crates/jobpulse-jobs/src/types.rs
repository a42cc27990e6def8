use jobpulse_core::JobListing;
use serde::Serialize;

/// Parameters for one job search, passed to every provider adapter.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub search: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub company_name: Option<String>,
    pub limit: u32,
}

impl JobQuery {
    #[must_use]
    pub fn new(search: &str, location: Option<&str>, limit: u32) -> Self {
        Self {
            search: search.to_owned(),
            location: location.map(str::to_owned),
            category: None,
            company_name: None,
            limit,
        }
    }
}

/// Aggregator response: always populated, never an error.
///
/// `source` identifies where the listings came from: a provider name (or
/// `+`-joined names in parallel-merge mode), `"cached"` when the outbound
/// gate tripped, `"mock"` when every provider failed, or `"fallback"` when
/// live results were filtered to empty. `message` carries the advisory text
/// for the non-live sources.
#[derive(Debug, Clone, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobListing>,
    pub total: usize,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
