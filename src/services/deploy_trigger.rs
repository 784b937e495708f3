use reqwest::Client;

use super::outbound::{post_json, DeliveryOutcome, DeliveryTarget};
use crate::models::{DeployRequest, WebhookRoute};

/// Starts DeployHQ deployments through the real-time deploy endpoint.
#[derive(Clone)]
pub struct DeployTriggerService {
    client: Client,
    base_url: String,
}

impl DeployTriggerService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn trigger(&self, route: &WebhookRoute, request: &DeployRequest) -> DeliveryOutcome {
        post_json(
            &self.client,
            DeliveryTarget::Deployhq,
            &route.url(&self.base_url),
            request,
        )
        .await
    }
}
