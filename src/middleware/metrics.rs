use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

use crate::models::Provider;
use crate::services::{DeliveryOutcome, DeliveryTarget};

/// Label used for requests that matched no route.
const UNMATCHED: &str = "unmatched";

/// Metrics middleware that tracks request counts and latency per route
/// pattern. The concrete path carries webhook tokens and is never used as a
/// label.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let route = route_label(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "route" => route.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "route" => route,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

pub(crate) fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED.to_string())
}

/// How an inbound webhook was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// A message was produced and handed to the outbound sender.
    Relayed,
    /// The event or action is not one the relay reports.
    Ignored,
    /// The payload could not be decoded or translated.
    Rejected,
    /// Test delivery answered in place.
    Echoed,
}

impl RelayOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            RelayOutcome::Relayed => "relayed",
            RelayOutcome::Ignored => "ignored",
            RelayOutcome::Rejected => "rejected",
            RelayOutcome::Echoed => "echoed",
        }
    }
}

/// Track one inbound webhook
pub fn track_relay_event(provider: Provider, outcome: RelayOutcome) {
    counter!(
        "relay_events_total",
        "provider" => provider.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Track one outbound POST
pub fn track_outbound_delivery(target: DeliveryTarget, outcome: DeliveryOutcome) {
    counter!(
        "relay_outbound_deliveries_total",
        "target" => target.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}
