//! Review outcome to HTTP result mapping

use crate::error::ServerError;
use approval_review::{ProviderError, ReviewOutcome, ReviewResponse};

/// Decide what the caller sees for a review outcome.
///
/// Malformed provider answers still yield the fail-closed body with 200;
/// timeouts and outages are surfaced as 504 / 503 without a decision.
pub(super) fn outcome_to_result(outcome: ReviewOutcome) -> Result<ReviewResponse, ServerError> {
    match outcome.failure {
        None | Some(ProviderError::InvalidResponse(_)) => Ok(outcome.response),
        Some(failure) => Err(failure.into()),
    }
}
