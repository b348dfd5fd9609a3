//! Decision mapping with a fail-closed policy

use crate::error::ProviderError;
use crate::model::{ReviewDecision, ReviewResponse};
use crate::provider::ProviderVerdict;

/// Explanation returned whenever the provider could not produce a verdict
pub const FAIL_CLOSED_EXPLANATION: &str = "Unable to complete the review - rejected for safety.";

/// Final result of one review.
///
/// `response` is always well-formed. When the provider failed, `failure`
/// carries the cause so the HTTP layer can pick a status code, and the
/// decision is always `Reject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub response: ReviewResponse,
    pub failure: Option<ProviderError>,
}

impl ReviewOutcome {
    /// Whether the response is the fail-closed default
    pub fn is_fallback(&self) -> bool {
        self.failure.is_some()
    }
}

/// Map a provider result into the response contract
pub fn map_outcome(result: Result<ProviderVerdict, ProviderError>) -> ReviewOutcome {
    match result {
        Ok(verdict) => ReviewOutcome {
            response: ReviewResponse::new(verdict.decision, verdict.explanation),
            failure: None,
        },
        Err(err) => ReviewOutcome {
            response: ReviewResponse::new(ReviewDecision::Reject, FAIL_CLOSED_EXPLANATION),
            failure: Some(err),
        },
    }
}
