//! Multi-provider job search with fallback chain.
//!
//! Providers are tried sequentially (first non-empty success wins) or in
//! parallel (all results merged) depending on configuration. Individual
//! provider failures are logged and absorbed; when nothing survives the
//! fallback chain substitutes the locally-scored sample set, so the caller
//! always receives a populated response.

use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;

use jobpulse_core::{JobListing, ProviderStrategy};

use crate::error::AggregatorError;
use crate::providers::{ProviderAdapter, RemotiveProvider};
use crate::sample::rank_sample_jobs;
use crate::state::{AggregatorState, CacheKey};
use crate::types::{JobQuery, JobSearchResponse};

const CACHED_MESSAGE: &str = "Showing cached results due to rate limiting";
const MOCK_MESSAGE: &str = "External job services unavailable. Showing sample opportunities.";
const FALLBACK_MESSAGE: &str = "No live listings matched. Showing sample opportunities.";

/// Tuning knobs for one aggregator instance.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub provider_timeout_secs: u64,
    pub user_agent: String,
    pub strategy: ProviderStrategy,
    pub cache_ttl_secs: u64,
    pub min_request_interval_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            provider_timeout_secs: 10,
            user_agent: "jobpulse/0.1 (job-market-aggregation)".to_string(),
            strategy: ProviderStrategy::ParallelMerge,
            cache_ttl_secs: 600,
            min_request_interval_secs: 5,
        }
    }
}

/// The remote-job aggregator. Owns its HTTP client, provider list, and the
/// loose rate-limit/cache state.
pub struct JobAggregator {
    client: Client,
    providers: Vec<Box<dyn ProviderAdapter>>,
    strategy: ProviderStrategy,
    cache_ttl: Duration,
    min_request_interval: Duration,
    state: AggregatorState,
}

impl JobAggregator {
    /// Creates an aggregator with the default Remotive provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &AggregatorConfig) -> Result<Self, AggregatorError> {
        Self::with_providers(
            config,
            vec![
                Box::new(RemotiveProvider::remotive_io()),
                Box::new(RemotiveProvider::remotive_com()),
            ],
        )
    }

    /// Creates an aggregator with an explicit provider list (for tests).
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::Http`] if the HTTP client cannot be built.
    pub fn with_providers(
        config: &AggregatorConfig,
        providers: Vec<Box<dyn ProviderAdapter>>,
    ) -> Result<Self, AggregatorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            providers,
            strategy: config.strategy,
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            min_request_interval: Duration::from_secs(config.min_request_interval_secs),
            state: AggregatorState::new(),
        })
    }

    /// Searches all configured providers and returns a populated response.
    /// Never fails: every failure path resolves to cached, sample, or
    /// fallback content.
    pub async fn search_jobs(&self, query: &JobQuery) -> JobSearchResponse {
        let limit = query.limit.clamp(1, 50);
        let mut bounded = query.clone();
        bounded.limit = limit;

        if !self.state.outbound_allowed(self.min_request_interval).await {
            tracing::debug!(search = %bounded.search, "outbound gate tripped, serving cached");
            return self.rate_limited_response(&bounded, limit as usize).await;
        }

        let (fetched, source, any_provider_ok) = match self.strategy {
            ProviderStrategy::Sequential => self.fetch_sequential(&bounded).await,
            ProviderStrategy::ParallelMerge => self.fetch_parallel(&bounded).await,
        };

        let filtered = filter_by_location(fetched, bounded.location.as_deref());

        if filtered.is_empty() {
            let (source, message) = if any_provider_ok {
                ("fallback", FALLBACK_MESSAGE)
            } else {
                ("mock", MOCK_MESSAGE)
            };
            let samples = filter_by_location(
                rank_sample_jobs(&bounded.search),
                bounded.location.as_deref(),
            );
            let jobs: Vec<JobListing> = samples.into_iter().take(limit as usize).collect();
            return JobSearchResponse {
                total: jobs.len(),
                jobs,
                source: source.to_string(),
                message: Some(message.to_string()),
            };
        }

        self.state.remember_payload(filtered.clone()).await;

        let jobs: Vec<JobListing> = filtered.into_iter().take(limit as usize).collect();
        JobSearchResponse {
            total: jobs.len(),
            jobs,
            source,
            message: None,
        }
    }

    /// Serves the rate-limited path: the last successful payload when one
    /// exists, otherwise the ranked sample set. Tagged `"cached"` either way.
    async fn rate_limited_response(&self, query: &JobQuery, limit: usize) -> JobSearchResponse {
        let payload = match self.state.last_payload().await {
            Some(jobs) => filter_by_location(jobs, query.location.as_deref()),
            None => Vec::new(),
        };
        let jobs = if payload.is_empty() {
            filter_by_location(rank_sample_jobs(&query.search), query.location.as_deref())
        } else {
            payload
        };
        let jobs: Vec<JobListing> = jobs.into_iter().take(limit).collect();
        JobSearchResponse {
            total: jobs.len(),
            jobs,
            source: "cached".to_string(),
            message: Some(CACHED_MESSAGE.to_string()),
        }
    }

    /// Tries providers in order, stopping at the first non-empty success.
    /// Returns the listings, the credited source, and whether any provider
    /// responded successfully at all.
    async fn fetch_sequential(&self, query: &JobQuery) -> (Vec<JobListing>, String, bool) {
        let mut any_ok = false;
        for adapter in &self.providers {
            match self.fetch_one(adapter.as_ref(), query).await {
                Ok(jobs) => {
                    any_ok = true;
                    if !jobs.is_empty() {
                        return (jobs, adapter.name().to_owned(), true);
                    }
                    tracing::debug!(provider = adapter.name(), "provider returned no listings");
                }
                Err(e) => {
                    tracing::warn!(provider = adapter.name(), error = %e, "provider fetch failed");
                }
            }
        }
        (Vec::new(), String::new(), any_ok)
    }

    /// Fans out to every provider concurrently and concatenates the
    /// successes. Failures contribute an empty list. The credited source is
    /// the `+`-joined names of providers that contributed listings.
    async fn fetch_parallel(&self, query: &JobQuery) -> (Vec<JobListing>, String, bool) {
        let fetches = self.providers.iter().map(|adapter| async move {
            (
                adapter.name().to_owned(),
                self.fetch_one(adapter.as_ref(), query).await,
            )
        });

        let mut merged = Vec::new();
        let mut contributors = Vec::new();
        let mut any_ok = false;

        for (name, result) in join_all(fetches).await {
            match result {
                Ok(jobs) => {
                    any_ok = true;
                    if !jobs.is_empty() {
                        contributors.push(name);
                    }
                    merged.extend(jobs);
                }
                Err(e) => {
                    tracing::warn!(provider = %name, error = %e, "provider fetch failed");
                }
            }
        }

        (merged, contributors.join("+"), any_ok)
    }

    /// Fetches one provider, consulting the TTL cache first. A cache hit
    /// never performs network I/O; a miss always does, and marks the
    /// outbound timestamp before the request goes out.
    async fn fetch_one(
        &self,
        adapter: &dyn ProviderAdapter,
        query: &JobQuery,
    ) -> Result<Vec<JobListing>, crate::error::ProviderError> {
        let key = CacheKey::new(adapter.name(), &query.search, query.limit);
        if let Some(jobs) = self.state.cache_lookup(&key, self.cache_ttl).await {
            tracing::debug!(provider = adapter.name(), "cache hit");
            return Ok(jobs);
        }

        self.state.mark_outbound().await;
        let jobs = adapter.fetch(&self.client, query).await?;
        self.state.cache_store(key, jobs.clone()).await;
        Ok(jobs)
    }
}

/// Location filter: retains listings whose location contains the filter
/// substring, or `"remote"`, or `"worldwide"`, all case-insensitive. The
/// union is intentional — a listing is never excluded solely for naming a
/// different region when it is remote-friendly.
fn filter_by_location(jobs: Vec<JobListing>, location: Option<&str>) -> Vec<JobListing> {
    let Some(needle) = location
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
    else {
        return jobs;
    };

    jobs.into_iter()
        .filter(|job| {
            let haystack = job.required_location.to_lowercase();
            haystack.contains(&needle)
                || haystack.contains("remote")
                || haystack.contains("worldwide")
        })
        .collect()
}
