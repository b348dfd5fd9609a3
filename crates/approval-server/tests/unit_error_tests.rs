//! Unit tests for ServerError response bodies

use approval_review::{Field, ProviderError, ValidationError, ValidationKind};
use approval_server::error::ServerError;
use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Duration;

async fn body_json(err: ServerError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_too_long_sales_page_body() {
    let err: ServerError =
        ValidationError::new(Field::SalesPage, ValidationKind::TooLong { max: 10_000 }).into();
    let (status, json) = body_json(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Sales page content too long");
    assert_eq!(json["field"], "sales_page");
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_validation_error_body() {
    let err: ServerError = ValidationError::new(Field::ProductName, ValidationKind::Missing).into();
    let (status, json) = body_json(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "Validation Error");
    assert_eq!(json["field"], "product_name");
    assert!(json["detail"].as_str().unwrap().starts_with("product_name"));
}

#[tokio::test]
async fn test_timeout_body_has_no_decision() {
    let err: ServerError = ProviderError::Timeout(Duration::from_secs(30)).into();
    let (status, json) = body_json(err).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["error"], "Service Timeout");
    assert!(json["detail"].as_str().unwrap().contains("30s"));
    assert!(json.get("decision").is_none());
}

#[tokio::test]
async fn test_unavailable_body() {
    let err: ServerError = ProviderError::Unavailable("connection refused".to_string()).into();
    let (status, json) = body_json(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "Service Unavailable");
    assert!(json["detail"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let (status, json) = body_json(ServerError::InternalError("db password leaked".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["detail"], "An unexpected error occurred");
    assert!(!json.to_string().contains("password"));
}

#[tokio::test]
async fn test_invalid_request_body() {
    let (status, json) = body_json(ServerError::InvalidRequest("JSON syntax error: eof".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid Request");
    assert_eq!(json["detail"], "JSON syntax error: eof");
    assert!(json.get("field").is_none());
}
