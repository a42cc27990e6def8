mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = jobpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let aggregator_config = jobpulse_jobs::AggregatorConfig {
        provider_timeout_secs: config.provider_timeout_secs,
        user_agent: config.provider_user_agent.clone(),
        strategy: config.provider_strategy,
        cache_ttl_secs: config.cache_ttl_secs,
        min_request_interval_secs: config.min_request_interval_secs,
    };
    let aggregator = Arc::new(jobpulse_jobs::JobAggregator::new(&aggregator_config)?);

    let intel = match config.serper_api_key.as_deref() {
        Some(key) => {
            let search = jobpulse_search::SearchClient::new(key, config.search_timeout_secs)?;
            Some(Arc::new(jobpulse_intel::MarketIntel::new(search)))
        }
        None => {
            tracing::warn!("SERPER_API_KEY not set; market intelligence routes disabled");
            None
        }
    };

    let app = build_app(AppState { aggregator, intel });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting jobpulse server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
