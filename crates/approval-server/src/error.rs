//! Server error types

use approval_review::{ProviderError, ValidationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Request body could not be read as JSON
    InvalidRequest(String),

    /// Request fields violate their constraints
    Validation(ValidationError),

    /// JSON body does not match the request shape
    UnprocessableEntity(String),

    /// Review provider unreachable or refused the credential
    ProviderUnavailable(String),

    /// Review provider did not answer in time
    ProviderTimeout(String),

    /// Internal server error
    InternalError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::Validation(err) => write!(f, "Validation error: {}", err),
            ServerError::UnprocessableEntity(msg) => write!(f, "Validation error: {}", msg),
            ServerError::ProviderUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            ServerError::ProviderTimeout(msg) => write!(f, "Service timeout: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl ServerError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Validation(err) if err.is_payload_too_large() => StatusCode::BAD_REQUEST,
            ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::ProviderUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::ProviderTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ServerError::Validation(err) => {
                let title = if err.is_payload_too_large() {
                    "Sales page content too long"
                } else {
                    "Validation Error"
                };
                json!({
                    "error": title,
                    "detail": err.to_string(),
                    "field": err.field.as_str(),
                    "status": status.as_u16(),
                })
            }
            ServerError::InvalidRequest(msg) => json!({
                "error": "Invalid Request",
                "detail": msg,
                "status": status.as_u16(),
            }),
            ServerError::UnprocessableEntity(msg) => json!({
                "error": "Validation Error",
                "detail": msg,
                "status": status.as_u16(),
            }),
            ServerError::ProviderUnavailable(msg) => json!({
                "error": "Service Unavailable",
                "detail": msg,
                "status": status.as_u16(),
            }),
            ServerError::ProviderTimeout(msg) => json!({
                "error": "Service Timeout",
                "detail": msg,
                "status": status.as_u16(),
            }),
            ServerError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                json!({
                    "error": "Internal Server Error",
                    "detail": "An unexpected error occurred",
                    "status": status.as_u16(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ServerError {
    fn from(err: ValidationError) -> Self {
        ServerError::Validation(err)
    }
}

impl From<ProviderError> for ServerError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout(_) => ServerError::ProviderTimeout(err.to_string()),
            ProviderError::Unavailable(_) => ServerError::ProviderUnavailable(err.to_string()),
            ProviderError::InvalidResponse(_) => ServerError::InternalError(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
