//! Error types for the approval review core

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for LLM transport operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// LLM transport errors
#[derive(Debug, Error)]
pub enum LLMError {
    /// External API call failed (transport, auth or non-success status)
    #[error("External API call failed: {0}")]
    ApiCallFailed(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl LLMError {
    /// Whether the underlying HTTP request hit the client-side timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, LLMError::HttpError(e) if e.is_timeout())
    }
}

/// Failure of a review provider.
///
/// Every variant is handled by the decision mapper, which turns it into a
/// fail-closed `Reject` decision.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider did not answer within the configured timeout
    #[error("Review service timeout after {}s - please try again", .0.as_secs())]
    Timeout(Duration),

    /// Transport or authentication failure
    #[error("AI service temporarily unavailable: {0}")]
    Unavailable(String),

    /// The provider answered but the payload does not match the decision schema
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl From<LLMError> for ProviderError {
    fn from(err: LLMError) -> Self {
        if err.is_timeout() {
            // reqwest does not expose the configured duration
            return ProviderError::Timeout(Duration::ZERO);
        }
        match err {
            LLMError::InvalidResponse(msg) => ProviderError::InvalidResponse(msg),
            LLMError::SerializationError(e) => ProviderError::InvalidResponse(e.to_string()),
            other => ProviderError::Unavailable(other.to_string()),
        }
    }
}

/// Request field subject to validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProductName,
    SalesPage,
}

impl Field {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ProductName => "product_name",
            Field::SalesPage => "sales_page",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Violated constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Field absent from the request
    Missing,
    /// Field empty or whitespace only
    Empty,
    /// Shorter than the minimum length (in characters)
    TooShort { min: usize },
    /// Longer than the maximum length (in characters)
    TooLong { max: usize },
}

/// Input validation failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {}", describe(.kind))]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
}

fn describe(kind: &ValidationKind) -> String {
    match kind {
        ValidationKind::Missing => "field required".to_string(),
        ValidationKind::Empty => "cannot be empty or just whitespace".to_string(),
        ValidationKind::TooShort { min } => format!("must be at least {} characters", min),
        ValidationKind::TooLong { max } => format!("must be at most {} characters", max),
    }
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationKind) -> Self {
        Self { field, kind }
    }

    /// Sales page content over the configured maximum.
    ///
    /// Distinct from malformed input: the HTTP layer answers 400 instead of 422.
    pub fn is_payload_too_large(&self) -> bool {
        self.field == Field::SalesPage && matches!(self.kind, ValidationKind::TooLong { .. })
    }
}
