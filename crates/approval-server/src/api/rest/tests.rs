//! Tests for REST API components

#![cfg(test)]

use super::conversions::*;
use super::types::*;
use crate::error::ServerError;
use approval_review::{map_outcome, ProviderError, ProviderVerdict, ReviewDecision};
use std::time::Duration;

#[test]
fn test_review_payload_missing_fields_deserialize() {
    let payload: ReviewRequestPayload = serde_json::from_str(r#"{"sales_page": "x"}"#).unwrap();
    assert!(payload.product_name.is_none());
    assert_eq!(payload.sales_page.as_deref(), Some("x"));

    let payload: ReviewRequestPayload = serde_json::from_str("{}").unwrap();
    assert!(payload.product_name.is_none());
    assert!(payload.sales_page.is_none());
}

#[test]
fn test_review_payload_wrong_type_fails() {
    let result = serde_json::from_str::<ReviewRequestPayload>(r#"{"product_name": 42}"#);
    assert!(result.is_err());
}

#[test]
fn test_health_response_serializes() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: "Product Approval AI".to_string(),
        version: "0.1.0".to_string(),
        mock_mode: true,
        provider: "mock".to_string(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["mock_mode"], true);
    assert_eq!(json["provider"], "mock");
}

#[test]
fn test_successful_outcome_is_ok() {
    let outcome = map_outcome(Ok(ProviderVerdict::new(
        ReviewDecision::Approve,
        "Product appears educational and evidence-based.",
    )));

    let response = outcome_to_result(outcome).unwrap();
    assert_eq!(response.decision, ReviewDecision::Approve);
}

#[test]
fn test_invalid_provider_response_is_fail_closed_body() {
    let outcome = map_outcome(Err(ProviderError::InvalidResponse("junk".to_string())));

    let response = outcome_to_result(outcome).unwrap();
    assert_eq!(response.decision, ReviewDecision::Reject);
}

#[test]
fn test_timeout_and_outage_surface_as_errors() {
    let outcome = map_outcome(Err(ProviderError::Timeout(Duration::from_secs(30))));
    assert!(matches!(
        outcome_to_result(outcome),
        Err(ServerError::ProviderTimeout(_))
    ));

    let outcome = map_outcome(Err(ProviderError::Unavailable("401".to_string())));
    assert!(matches!(
        outcome_to_result(outcome),
        Err(ServerError::ProviderUnavailable(_))
    ));
}
