//! Shared aggregator state: the outbound-call gate and the TTL response
//! cache.
//!
//! Both are deliberately loose, best-effort mechanisms. Concurrent requests
//! may race on the outbound timestamp; the worst case is one extra allowed
//! request, which is acceptable. Cache entries are never proactively
//! evicted — staleness is checked only at lookup time.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use jobpulse_core::JobListing;

/// Cache key: provider name, normalized query text, and page limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    provider: String,
    query: String,
    limit: u32,
}

impl CacheKey {
    pub(crate) fn new(provider: &str, raw_query: &str, limit: u32) -> Self {
        Self {
            provider: provider.to_owned(),
            query: raw_query.trim().to_lowercase(),
            limit,
        }
    }
}

struct CacheEntry {
    jobs: Vec<JobListing>,
    fetched_at: Instant,
}

/// Process-wide mutable state for one [`crate::JobAggregator`] instance.
pub(crate) struct AggregatorState {
    last_outbound: Mutex<Option<Instant>>,
    cache: Mutex<HashMap<CacheKey, CacheEntry>>,
    last_payload: Mutex<Option<Vec<JobListing>>>,
}

impl AggregatorState {
    pub(crate) fn new() -> Self {
        Self {
            last_outbound: Mutex::new(None),
            cache: Mutex::new(HashMap::new()),
            last_payload: Mutex::new(None),
        }
    }

    /// Whether enough time has passed since the previous outbound call.
    /// Always true before the first outbound call.
    pub(crate) async fn outbound_allowed(&self, min_interval: Duration) -> bool {
        let last = self.last_outbound.lock().await;
        last.is_none_or(|t| t.elapsed() >= min_interval)
    }

    /// Records that an outbound call is being made now.
    pub(crate) async fn mark_outbound(&self) {
        *self.last_outbound.lock().await = Some(Instant::now());
    }

    /// Returns the cached listings for `key` if the entry is still fresh.
    /// Stale entries are left in place; lookup is the only staleness check.
    pub(crate) async fn cache_lookup(&self, key: &CacheKey, ttl: Duration) -> Option<Vec<JobListing>> {
        let cache = self.cache.lock().await;
        cache
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < ttl)
            .map(|entry| entry.jobs.clone())
    }

    pub(crate) async fn cache_store(&self, key: CacheKey, jobs: Vec<JobListing>) {
        self.cache.lock().await.insert(
            key,
            CacheEntry {
                jobs,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Remembers the most recent successful (non-empty, post-filter) payload
    /// so the rate-limited path has something live-ish to serve.
    pub(crate) async fn remember_payload(&self, jobs: Vec<JobListing>) {
        *self.last_payload.lock().await = Some(jobs);
    }

    pub(crate) async fn last_payload(&self) -> Option<Vec<JobListing>> {
        self.last_payload.lock().await.clone()
    }
}
