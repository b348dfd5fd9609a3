//! Custom extractors
//!
//! Provides custom request extractors with better error handling.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

/// Custom JSON extractor with better error messages
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(match rejection {
                // Well-formed JSON with the wrong shape is a field-level problem
                JsonRejection::JsonDataError(err) => {
                    ServerError::UnprocessableEntity(format!("Invalid JSON data: {}", err.body_text()))
                }
                JsonRejection::JsonSyntaxError(err) => {
                    ServerError::InvalidRequest(format!("JSON syntax error: {}", err.body_text()))
                }
                JsonRejection::MissingJsonContentType(_) => ServerError::InvalidRequest(
                    "Missing 'Content-Type: application/json' header".to_string(),
                ),
                _ => ServerError::InvalidRequest(format!("Failed to parse JSON: {}", rejection)),
            }),
        }
    }
}
