//! REST API type definitions

use approval_review::ReviewService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReviewService>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub mock_mode: bool,
    pub provider: String,
}

/// Review request payload.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported by the validator with the field name.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewRequestPayload {
    /// Name of the product to review
    #[serde(default)]
    pub product_name: Option<String>,

    /// Sales page content to analyze
    #[serde(default)]
    pub sales_page: Option<String>,
}
