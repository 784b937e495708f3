//! Application startup and initialization logic.

use anyhow::Result;
use reqwest::Client;
use tracing::{error, info};

use crate::app_state::AppState;
use crate::config::Config;

/// Initialize the outbound client and metrics recorder and create the
/// AppState.
pub fn initialize_app(config: &Config) -> Result<AppState> {
    info!("🚀 Starting hook relay ({})", config.environment);

    let metrics_handle = if config.metrics_enabled {
        let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;
        info!("✅ Prometheus metrics initialized");
        Some(handle)
    } else {
        info!("Prometheus metrics disabled");
        None
    };

    let client = build_http_client(config)?;
    info!(
        "✅ Outbound HTTP client initialized (timeout: {}s)",
        config.outbound_timeout_secs
    );

    Ok(AppState::new(config.clone(), client, metrics_handle))
}

/// Shared client for every outbound call.
pub fn build_http_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(config.outbound_timeout())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}
