//! API endpoint handlers

use super::conversions::outcome_to_result;
use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use approval_review::ReviewResponse;
use axum::{extract::State, Json};
use tracing::{error, info};

/// Service name reported by the health endpoint
pub(super) const SERVICE_NAME: &str = "Product Approval AI";

/// Health check endpoint
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        mock_mode: state.service.is_mock(),
        provider: state.service.provider_name().to_string(),
    })
}

/// Review endpoint
#[axum::debug_handler]
pub(super) async fn review(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<ReviewRequestPayload>,
) -> Result<Json<ReviewResponse>, ServerError> {
    let outcome = state
        .service
        .review(payload.product_name.as_deref(), payload.sales_page.as_deref())
        .await
        .map_err(|e| {
            info!("Rejected review request: {}", e);
            ServerError::from(e)
        })?;

    let response = outcome_to_result(outcome).map_err(|e| {
        error!("Review service error: {}", e);
        e
    })?;

    Ok(Json(response))
}
