//! Body extractors for webhook handlers.
//!
//! Senders are not consistent about `Content-Type`, so bodies are read as
//! bytes and decoded here instead of through `axum::Json`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    Form,
};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::models::deployhq::DeployhqEnvelope;

/// Any JSON body. An empty body reads as `{}`.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| body_error(rejection.status(), rejection.body_text()))?;

        parse_json(&bytes).map(JsonPayload)
    }
}

pub fn parse_json(bytes: &[u8]) -> Result<Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(bytes).map_err(|e| ApiError::InvalidPayload(e.to_string()))
}

/// DeployHQ's outer `payload=<json>` body, sent either form-encoded or as
/// JSON.
#[derive(Debug, Clone)]
pub struct DeployhqBody(pub DeployhqEnvelope);

impl<S> FromRequest<S> for DeployhqBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(envelope) = Form::<DeployhqEnvelope>::from_request(req, state)
                .await
                .map_err(|rejection| body_error(rejection.status(), rejection.body_text()))?;
            return Ok(DeployhqBody(envelope));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| body_error(rejection.status(), rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(DeployhqBody)
            .map_err(|e| ApiError::InvalidPayload(e.to_string()))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

fn body_error(status: StatusCode, detail: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(detail)
    } else {
        ApiError::InvalidPayload(detail)
    }
}
