//! Shared types and configuration for JobPulse.
//!
//! Holds the wire types exchanged between the aggregation crates and the
//! server (`JobListing`, `SearchSnippet`, `MarketIntelligenceReport`) and the
//! environment-driven application configuration.

mod app_config;
mod config;
mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, ProviderStrategy};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{
    DemandInsight, JobListing, MarketIntelligenceReport, RemoteWorkInsight, SalaryInsight,
    SearchSnippet,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
