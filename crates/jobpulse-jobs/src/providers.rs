//! Provider adapters and normalization to [`JobListing`].
//!
//! One adapter per third-party listing API. Each adapter owns its base URL
//! (overridable for tests) and converts its native response shape into the
//! common job record, so adding or removing a provider never touches
//! aggregation logic.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use jobpulse_core::JobListing;

use crate::error::ProviderError;
use crate::types::JobQuery;

pub(crate) const PLACEHOLDER_LOGO_URL: &str = "https://via.placeholder.com/50";

/// A single third-party job-listing API.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Provider name, used for cache keys and the response `source` tag.
    fn name(&self) -> &str;

    /// Fetches and normalizes listings for one query.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, a non-2xx status, or
    /// an unparsable body. The aggregator absorbs all of these.
    async fn fetch(&self, client: &Client, query: &JobQuery)
        -> Result<Vec<JobListing>, ProviderError>;
}

/// Remotive-style `remote-jobs` API adapter.
///
/// Remotive serves the same JSON shape from two hosts; both are modeled as
/// separate adapters so the fallback chain can try each independently.
pub struct RemotiveProvider {
    name: String,
    base_url: String,
}

impl RemotiveProvider {
    #[must_use]
    pub fn remotive_io() -> Self {
        Self::with_base_url("Remotive.io", "https://remotive.io")
    }

    #[must_use]
    pub fn remotive_com() -> Self {
        Self::with_base_url("Remotive.com", "https://remotive.com")
    }

    /// Adapter with a custom host (for testing with wiremock).
    #[must_use]
    pub fn with_base_url(name: &str, base_url: &str) -> Self {
        Self {
            name: name.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for RemotiveProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(
        &self,
        client: &Client,
        query: &JobQuery,
    ) -> Result<Vec<JobListing>, ProviderError> {
        let mut url = reqwest::Url::parse(&format!("{}/api/remote-jobs", self.base_url))
            .map_err(|e| ProviderError::InvalidUrl {
                provider: self.name.clone(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            let search = query.search.trim();
            if !search.is_empty() {
                pairs.append_pair("search", search);
            }
            if let Some(location) = query.location.as_deref().map(str::trim) {
                if !location.is_empty() {
                    pairs.append_pair("location", location);
                }
            }
            if let Some(category) = query.category.as_deref() {
                pairs.append_pair("category", category);
            }
            if let Some(company) = query.company_name.as_deref() {
                pairs.append_pair("company_name", company);
            }
            pairs.append_pair("limit", &query.limit.to_string());
        }

        let response = client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UnexpectedStatus {
                provider: self.name.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: RemotiveResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
                provider: self.name.clone(),
                source: e,
            })?;

        tracing::debug!(
            provider = %self.name,
            count = parsed.jobs.len(),
            "provider fetch completed"
        );

        Ok(parsed
            .jobs
            .into_iter()
            .map(|raw| normalize_job(raw, &self.name))
            .collect())
    }
}

/// Raw Remotive response envelope.
#[derive(Debug, Deserialize)]
struct RemotiveResponse {
    #[serde(default)]
    jobs: Vec<RemotiveJob>,
}

/// Raw Remotive job record. Every field is optional: normalization supplies
/// documented defaults rather than rejecting partial records.
#[derive(Debug, Deserialize)]
struct RemotiveJob {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    company_logo: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    job_type: Option<String>,
    #[serde(default)]
    publication_date: Option<String>,
    #[serde(default)]
    candidate_required_location: Option<String>,
    #[serde(default)]
    salary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Converts a raw provider record into a [`JobListing`], applying the
/// documented defaults: missing logo becomes a placeholder URL, missing
/// location becomes `"Remote"`, missing salary becomes `"Competitive"`.
/// Empty strings are treated as absent.
fn normalize_job(raw: RemotiveJob, provider: &str) -> JobListing {
    JobListing {
        id: raw_id_to_string(&raw.id),
        title: non_empty(raw.title).unwrap_or_default(),
        company_name: non_empty(raw.company_name).unwrap_or_default(),
        company_logo_url: non_empty(raw.company_logo)
            .unwrap_or_else(|| PLACEHOLDER_LOGO_URL.to_string()),
        category: non_empty(raw.category).unwrap_or_default(),
        employment_type: non_empty(raw.job_type).unwrap_or_default(),
        published_at: non_empty(raw.publication_date).unwrap_or_default(),
        required_location: non_empty(raw.candidate_required_location)
            .unwrap_or_else(|| "Remote".to_string()),
        salary_text: non_empty(raw.salary).unwrap_or_else(|| "Competitive".to_string()),
        description: non_empty(raw.description).unwrap_or_default(),
        detail_url: non_empty(raw.url).unwrap_or_default(),
        tags: raw.tags,
        source_provider: provider.to_owned(),
    }
}

/// Provider-native IDs arrive as numbers or strings depending on the API.
fn raw_id_to_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_job(json: serde_json::Value) -> RemotiveJob {
        serde_json::from_value(json).expect("raw job should parse")
    }

    #[test]
    fn normalize_applies_documented_defaults() {
        let raw = raw_job(serde_json::json!({
            "id": 7,
            "title": "Platform Engineer",
        }));
        let job = normalize_job(raw, "Remotive.io");
        assert_eq!(job.id, "7");
        assert_eq!(job.title, "Platform Engineer");
        assert_eq!(job.company_logo_url, PLACEHOLDER_LOGO_URL);
        assert_eq!(job.required_location, "Remote");
        assert_eq!(job.salary_text, "Competitive");
        assert_eq!(job.source_provider, "Remotive.io");
    }

    #[test]
    fn normalize_treats_empty_strings_as_absent() {
        let raw = raw_job(serde_json::json!({
            "id": "abc-1",
            "company_logo": "",
            "candidate_required_location": "  ",
            "salary": ""
        }));
        let job = normalize_job(raw, "Remotive.com");
        assert_eq!(job.id, "abc-1");
        assert_eq!(job.company_logo_url, PLACEHOLDER_LOGO_URL);
        assert_eq!(job.required_location, "Remote");
        assert_eq!(job.salary_text, "Competitive");
    }

    #[test]
    fn normalize_keeps_provider_values_when_present() {
        let raw = raw_job(serde_json::json!({
            "id": 12,
            "title": "Data Engineer",
            "company_name": "DataFlow",
            "company_logo": "https://cdn.example.com/logo.png",
            "candidate_required_location": "Europe",
            "salary": "$90,000 - $120,000",
            "tags": ["python", "sql"]
        }));
        let job = normalize_job(raw, "Remotive.io");
        assert_eq!(job.company_logo_url, "https://cdn.example.com/logo.png");
        assert_eq!(job.required_location, "Europe");
        assert_eq!(job.salary_text, "$90,000 - $120,000");
        assert_eq!(job.tags, vec!["python", "sql"]);
    }

    #[test]
    fn response_without_jobs_field_parses_to_empty() {
        let parsed: RemotiveResponse =
            serde_json::from_str("{\"job-count\": 0}").expect("parse");
        assert!(parsed.jobs.is_empty());
    }
}
