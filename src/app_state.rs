//! Application state shared across all handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use reqwest::Client;

use crate::config::Config;
use crate::services::{DeployTriggerService, DiscordService};

/// Application state shared across handlers.
///
/// Holds no mutable state: the services wrap a pooled HTTP client that is
/// cheap to clone into each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub discord: DiscordService,
    pub deploy_trigger: DeployTriggerService,
    /// Present when the Prometheus recorder is installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: Config, client: Client, metrics_handle: Option<PrometheusHandle>) -> Self {
        Self {
            discord: DiscordService::new(client.clone(), &config.discord_webhook_base_url),
            deploy_trigger: DeployTriggerService::new(client, &config.deployhq_deploy_base_url),
            config,
            metrics_handle,
        }
    }
}
