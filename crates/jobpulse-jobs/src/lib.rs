//! Remote-job aggregation for JobPulse.
//!
//! Queries one or more external job-listing providers, normalizes their
//! heterogeneous response shapes into [`jobpulse_core::JobListing`], filters
//! by location, and falls back to a deterministic locally-scored sample set
//! when every provider fails or returns nothing. The public entry point,
//! [`JobAggregator::search_jobs`], never returns an error: every failure
//! path resolves to a populated response.

mod aggregator;
mod error;
mod providers;
mod sample;
mod state;
mod types;

pub use aggregator::{AggregatorConfig, JobAggregator};
pub use error::{AggregatorError, ProviderError};
pub use providers::{ProviderAdapter, RemotiveProvider};
pub use types::{JobQuery, JobSearchResponse};
