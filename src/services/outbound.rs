use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::middleware::metrics::track_outbound_delivery;

/// Where an outbound call goes, for logs and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryTarget {
    Discord,
    Deployhq,
}

impl DeliveryTarget {
    pub const fn as_str(self) -> &'static str {
        match self {
            DeliveryTarget::Discord => "discord",
            DeliveryTarget::Deployhq => "deployhq",
        }
    }
}

/// Result of a single fire-and-forget POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    /// The destination answered with a non-2xx status.
    Rejected(u16),
    /// No response came back.
    Failed,
}

impl DeliveryOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered => "delivered",
            DeliveryOutcome::Rejected(_) => "rejected",
            DeliveryOutcome::Failed => "failed",
        }
    }

    pub fn is_delivered(self) -> bool {
        self == DeliveryOutcome::Delivered
    }
}

/// POST `body` as JSON to `url` once. Never fails: problems are logged and
/// counted, and the caller carries on.
///
/// `url` embeds the destination's secret token, so it is never logged.
pub async fn post_json<T>(
    client: &Client,
    target: DeliveryTarget,
    url: &str,
    body: &T,
) -> DeliveryOutcome
where
    T: Serialize + ?Sized,
{
    let outcome = match client.post(url).json(body).send().await {
        Ok(res) if res.status().is_success() => {
            debug!(target_service = target.as_str(), status = %res.status(), "Outbound delivery accepted");
            DeliveryOutcome::Delivered
        }
        Ok(res) => {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            warn!(
                target_service = target.as_str(),
                status = %status,
                body = %body,
                "Outbound delivery rejected"
            );
            DeliveryOutcome::Rejected(status.as_u16())
        }
        Err(e) => {
            let timeout = e.is_timeout();
            warn!(
                target_service = target.as_str(),
                error = %e.without_url(),
                timeout,
                "Outbound delivery failed"
            );
            DeliveryOutcome::Failed
        }
    };

    track_outbound_delivery(target, outcome);
    outcome
}
