use reqwest::Client;

use super::outbound::{post_json, DeliveryOutcome, DeliveryTarget};
use crate::models::{DiscordMessage, WebhookRoute};

/// Posts translated messages to Discord's webhook execute endpoint.
#[derive(Clone)]
pub struct DiscordService {
    client: Client,
    base_url: String,
}

impl DiscordService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn send(&self, route: &WebhookRoute, message: &DiscordMessage) -> DeliveryOutcome {
        post_json(
            &self.client,
            DeliveryTarget::Discord,
            &route.url(&self.base_url),
            message,
        )
        .await
    }
}
