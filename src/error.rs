use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::middleware::request_logger::current_request_id;
use crate::translators::TranslateError;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ErrorCode {
    // Payload errors (3xxx)
    #[serde(rename = "VAL_3001")]
    InvalidPayload,
    #[serde(rename = "VAL_3002")]
    PayloadTooLarge,

    // Resource errors (4xxx)
    #[serde(rename = "RES_4001")]
    NotFound,

    // Internal errors (9xxx)
    #[serde(rename = "INT_9999")]
    InternalServerError,
}

impl ErrorCode {
    /// Get numeric code
    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::InvalidPayload => 3001,
            ErrorCode::PayloadTooLarge => 3002,
            ErrorCode::NotFound => 4001,
            ErrorCode::InternalServerError => 9999,
        }
    }

    /// Get the message sent to the caller
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPayload => "Invalid payload",
            ErrorCode::PayloadTooLarge => "Payload too large",
            ErrorCode::NotFound => "Not found",
            ErrorCode::InternalServerError => "Internal server error",
        }
    }
}

/// Structured error response. Only the code's fixed message is exposed;
/// the underlying cause is logged server-side.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub code: ErrorCode,
    pub code_number: u16,
    pub request_id: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, request_id: String) -> Self {
        Self {
            error: code.message(),
            code,
            code_number: code.code(),
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body is not valid JSON, or not the form the provider sends.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Well-formed JSON whose shape does not match a recognized event.
    #[error("Payload decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Translation error: {0}")]
    Translate(#[from] TranslateError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::InvalidPayload(_) => ErrorCode::InvalidPayload,
            ApiError::PayloadTooLarge(_) => ErrorCode::PayloadTooLarge,
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::Decode(_) | ApiError::Translate(_) | ApiError::Internal(_) => {
                ErrorCode::InternalServerError
            }
        }
    }

    /// Get status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Decode(_) | ApiError::Translate(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Log error with appropriate level
    fn log_error(&self, request_id: &str) {
        match self.status_code() {
            status if status.is_server_error() => {
                error!(
                    request_id = %request_id,
                    error = %self,
                    "Server error occurred"
                );
            }
            status if status.is_client_error() => {
                warn!(
                    request_id = %request_id,
                    error = %self,
                    "Client error occurred"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = current_request_id().unwrap_or_else(|| Uuid::new_v4().to_string());
        self.log_error(&request_id);

        let body = ErrorResponse::new(self.error_code(), request_id);
        (self.status_code(), Json(body)).into_response()
    }
}

/// Turn a handler panic into the generic 500 body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
