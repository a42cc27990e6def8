use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How the aggregator exercises its provider list.
///
/// Both modes are supported; `ParallelMerge` is the default because it
/// produces richer result sets. `Sequential` stops at the first provider
/// that returns a non-empty listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStrategy {
    Sequential,
    ParallelMerge,
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// API key for the web-search collaborator. Market-intelligence routes
    /// are disabled when absent.
    pub serper_api_key: Option<String>,
    pub search_timeout_secs: u64,
    pub provider_timeout_secs: u64,
    pub provider_user_agent: String,
    pub provider_strategy: ProviderStrategy,
    pub cache_ttl_secs: u64,
    pub min_request_interval_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "serper_api_key",
                &self.serper_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_timeout_secs", &self.search_timeout_secs)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .field("provider_user_agent", &self.provider_user_agent)
            .field("provider_strategy", &self.provider_strategy)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field(
                "min_request_interval_secs",
                &self.min_request_interval_secs,
            )
            .finish()
    }
}
