use crate::app_config::{AppConfig, Environment, ProviderStrategy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("JOBPULSE_ENV", "development"));
    let bind_addr = parse_addr("JOBPULSE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("JOBPULSE_LOG_LEVEL", "info");

    let serper_api_key = lookup("SERPER_API_KEY").ok().filter(|s| !s.is_empty());

    let search_timeout_secs = parse_u64("JOBPULSE_SEARCH_TIMEOUT_SECS", "8")?;
    let provider_timeout_secs = parse_u64("JOBPULSE_PROVIDER_TIMEOUT_SECS", "10")?;
    let provider_user_agent = or_default(
        "JOBPULSE_PROVIDER_USER_AGENT",
        "jobpulse/0.1 (job-market-aggregation)",
    );
    let provider_strategy =
        parse_provider_strategy(&or_default("JOBPULSE_PROVIDER_STRATEGY", "parallel"))?;

    let cache_ttl_secs = parse_u64("JOBPULSE_CACHE_TTL_SECS", "600")?;
    let min_request_interval_secs = parse_u64("JOBPULSE_MIN_REQUEST_INTERVAL_SECS", "5")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        serper_api_key,
        search_timeout_secs,
        provider_timeout_secs,
        provider_user_agent,
        provider_strategy,
        cache_ttl_secs,
        min_request_interval_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse a provider fetch strategy. Only `parallel` and `sequential` are
/// accepted; anything else is a configuration error rather than a silent
/// fallback, since the two modes produce visibly different results.
fn parse_provider_strategy(s: &str) -> Result<ProviderStrategy, ConfigError> {
    match s {
        "parallel" => Ok(ProviderStrategy::ParallelMerge),
        "sequential" => Ok(ProviderStrategy::Sequential),
        other => Err(ConfigError::InvalidEnvVar {
            var: "JOBPULSE_PROVIDER_STRATEGY".to_string(),
            reason: format!("expected \"parallel\" or \"sequential\", got \"{other}\""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should suffice");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.serper_api_key.is_none());
        assert_eq!(cfg.search_timeout_secs, 8);
        assert_eq!(cfg.provider_timeout_secs, 10);
        assert_eq!(cfg.provider_strategy, ProviderStrategy::ParallelMerge);
        assert_eq!(cfg.cache_ttl_secs, 600);
        assert_eq!(cfg.min_request_interval_secs, 5);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("JOBPULSE_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBPULSE_BIND_ADDR"),
            "expected InvalidEnvVar(JOBPULSE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_parses_sequential_strategy() {
        let mut map = HashMap::new();
        map.insert("JOBPULSE_PROVIDER_STRATEGY", "sequential");
        let cfg = build_app_config(lookup_from_map(&map)).expect("valid strategy");
        assert_eq!(cfg.provider_strategy, ProviderStrategy::Sequential);
    }

    #[test]
    fn build_app_config_rejects_unknown_strategy() {
        let mut map = HashMap::new();
        map.insert("JOBPULSE_PROVIDER_STRATEGY", "round-robin");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBPULSE_PROVIDER_STRATEGY"),
            "expected InvalidEnvVar(JOBPULSE_PROVIDER_STRATEGY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_treats_empty_api_key_as_absent() {
        let mut map = HashMap::new();
        map.insert("SERPER_API_KEY", "");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert!(cfg.serper_api_key.is_none());
    }

    #[test]
    fn build_app_config_reads_api_key() {
        let mut map = HashMap::new();
        map.insert("SERPER_API_KEY", "test-key");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.serper_api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn build_app_config_fails_with_invalid_ttl() {
        let mut map = HashMap::new();
        map.insert("JOBPULSE_CACHE_TTL_SECS", "ten-minutes");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBPULSE_CACHE_TTL_SECS"),
            "expected InvalidEnvVar(JOBPULSE_CACHE_TTL_SECS), got: {result:?}"
        );
    }
}
