//! Provider webhook handlers.
//!
//! Each handler decodes its payload, runs the provider's translator and
//! hands the result to the outbound sender. Outbound failures never change
//! the response: the sender is answered with an empty 200 once the
//! delivery attempt is over.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use tracing::{debug, info};

use super::extractors::{DeployhqBody, JsonPayload};
use crate::app_state::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{track_relay_event, RelayOutcome};
use crate::models::{
    DeployhqPayload, DiscordMessage, EventAnnouncement, GithubEvent, GitlabEvent, GitdeployPayload,
    GmodPayload, Provider, WebhookRoute,
};
use crate::translators::{self, testhook};

type Payload = Result<JsonPayload, ApiError>;

pub async fn github(
    State(state): State<AppState>,
    Path(route): Path<WebhookRoute>,
    headers: HeaderMap,
    payload: Payload,
) -> Result<(), ApiError> {
    let message = payload.and_then(|JsonPayload(body)| {
        let name = headers
            .get(GithubEvent::HEADER)
            .and_then(|value| value.to_str().ok());
        let event = GithubEvent::from_parts(name, body)?;
        debug!(event = event.name(), "GitHub event received");
        Ok(translators::github::translate(&event, Utc::now())?)
    });

    relay(&state, Provider::Github, &route, message).await
}

pub async fn gitlab(
    State(state): State<AppState>,
    Path(route): Path<WebhookRoute>,
    payload: Payload,
) -> Result<(), ApiError> {
    let message = payload.and_then(|JsonPayload(body)| {
        let event = GitlabEvent::from_value(body)?;
        debug!(event = event.kind(), "GitLab event received");
        Ok(translators::gitlab::translate(&event, Utc::now())?)
    });

    relay(&state, Provider::Gitlab, &route, message).await
}

pub async fn deployhq(
    State(state): State<AppState>,
    Path(route): Path<WebhookRoute>,
    body: Result<DeployhqBody, ApiError>,
) -> Result<(), ApiError> {
    let message = body.and_then(|DeployhqBody(envelope)| {
        let payload = DeployhqPayload::parse(&envelope.payload)
            .map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
        debug!(status = %payload.status, "DeployHQ notification received");
        Ok(translators::deployhq::translate(&payload, Utc::now())?)
    });

    relay(&state, Provider::Deployhq, &route, message).await
}

pub async fn gitdeploy(
    State(state): State<AppState>,
    Path(route): Path<WebhookRoute>,
    payload: Payload,
) -> Result<(), ApiError> {
    let request = payload.and_then(|JsonPayload(body)| {
        let payload: GitdeployPayload = serde_json::from_value(body)?;
        Ok(translators::gitdeploy::translate(&payload)?)
    });

    let request = match request {
        Ok(request) => request,
        Err(e) => {
            track_relay_event(Provider::Gitdeploy, RelayOutcome::Rejected);
            return Err(e);
        }
    };

    match request {
        Some(request) => {
            track_relay_event(Provider::Gitdeploy, RelayOutcome::Relayed);
            let outcome = state.deploy_trigger.trigger(&route, &request).await;
            info!(
                webhook_id = %route.id,
                branch = %request.payload.branch,
                outcome = outcome.as_str(),
                "Deploy trigger sent"
            );
        }
        None => {
            track_relay_event(Provider::Gitdeploy, RelayOutcome::Ignored);
            debug!(webhook_id = %route.id, "Pipeline not successful, no deploy");
        }
    }

    Ok(())
}

pub async fn gmod(
    State(state): State<AppState>,
    Path(route): Path<WebhookRoute>,
    payload: Payload,
) -> Result<(), ApiError> {
    let message = payload.and_then(|JsonPayload(body)| {
        let payload: GmodPayload = serde_json::from_value(body)?;
        Ok(Some(translators::gmod::translate(&payload, Utc::now())))
    });

    relay(&state, Provider::Gmod, &route, message).await
}

pub async fn events(
    State(state): State<AppState>,
    Path(route): Path<WebhookRoute>,
    payload: Payload,
) -> Result<(), ApiError> {
    let message = payload.and_then(|JsonPayload(body)| {
        let event: EventAnnouncement = serde_json::from_value(body)?;
        Ok(Some(translators::events::translate(&event, Utc::now())))
    });

    relay(&state, Provider::Events, &route, message).await
}

pub async fn testhook(JsonPayload(body): JsonPayload) -> Json<testhook::Echo> {
    info!(
        body = %serde_json::to_string_pretty(&body).unwrap_or_default(),
        "Test hook received"
    );
    track_relay_event(Provider::Testhook, RelayOutcome::Echoed);

    Json(testhook::echo(body))
}

/// Send the translated message, if any, and record what happened.
async fn relay(
    state: &AppState,
    provider: Provider,
    route: &WebhookRoute,
    message: Result<Option<DiscordMessage>, ApiError>,
) -> Result<(), ApiError> {
    let message = match message {
        Ok(message) => message,
        Err(e) => {
            track_relay_event(provider, RelayOutcome::Rejected);
            return Err(e);
        }
    };

    let Some(message) = message else {
        track_relay_event(provider, RelayOutcome::Ignored);
        debug!(provider = %provider, webhook_id = %route.id, "Event not reported");
        return Ok(());
    };

    track_relay_event(provider, RelayOutcome::Relayed);
    let outcome = state.discord.send(route, &message).await;
    info!(
        provider = %provider,
        webhook_id = %route.id,
        outcome = outcome.as_str(),
        "Message relayed"
    );

    Ok(())
}

