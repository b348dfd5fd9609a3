//! Review data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest explanation returned to callers, in characters
pub const MAX_EXPLANATION_CHARS: usize = 500;

/// Shortest explanation kept as-is, in characters
pub const MIN_EXPLANATION_CHARS: usize = 10;

/// Possible review decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject => "reject",
        }
    }

    /// Parse a provider-supplied decision, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "approve" => Some(ReviewDecision::Approve),
            "reject" => Some(ReviewDecision::Reject),
            _ => None,
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approved",
            ReviewDecision::Reject => "rejected",
        }
    }
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated review request.
///
/// Only produced by [`crate::validator::validate_review`], so both fields are
/// trimmed and within their length limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    product_name: String,
    sales_page: String,
}

impl ReviewRequest {
    pub(crate) fn new(product_name: String, sales_page: String) -> Self {
        Self {
            product_name,
            sales_page,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn sales_page(&self) -> &str {
        &self.sales_page
    }
}

/// Review result returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResponse {
    /// Approval decision: approve or reject
    pub decision: ReviewDecision,

    /// 1-3 sentence explanation of the decision
    pub explanation: String,
}

impl ReviewResponse {
    /// Build a response, clamping the explanation into 10..=500 characters
    pub fn new(decision: ReviewDecision, explanation: impl Into<String>) -> Self {
        Self {
            decision,
            explanation: normalize_explanation(decision, explanation.into()),
        }
    }
}

fn normalize_explanation(decision: ReviewDecision, explanation: String) -> String {
    let explanation = explanation.trim();
    let len = explanation.chars().count();

    if len > MAX_EXPLANATION_CHARS {
        let cut: String = explanation.chars().take(MAX_EXPLANATION_CHARS - 3).collect();
        format!("{}...", cut)
    } else if len < MIN_EXPLANATION_CHARS {
        format!("Product {} based on content analysis.", decision.past_tense())
    } else {
        explanation.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReviewDecision::Approve).unwrap(),
            "\"approve\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewDecision::Reject).unwrap(),
            "\"reject\""
        );
    }

    #[test]
    fn test_decision_parse() {
        assert_eq!(ReviewDecision::parse(" APPROVE "), Some(ReviewDecision::Approve));
        assert_eq!(ReviewDecision::parse("Reject"), Some(ReviewDecision::Reject));
        assert_eq!(ReviewDecision::parse("maybe"), None);
        assert_eq!(ReviewDecision::parse(""), None);
    }

    #[test]
    fn test_long_explanation_is_truncated() {
        let response = ReviewResponse::new(ReviewDecision::Reject, "x".repeat(800));
        assert_eq!(response.explanation.chars().count(), MAX_EXPLANATION_CHARS);
        assert!(response.explanation.ends_with("..."));
    }

    #[test]
    fn test_short_explanation_is_replaced() {
        let response = ReviewResponse::new(ReviewDecision::Approve, "ok");
        assert_eq!(
            response.explanation,
            "Product approved based on content analysis."
        );

        let response = ReviewResponse::new(ReviewDecision::Reject, "   ");
        assert_eq!(
            response.explanation,
            "Product rejected based on content analysis."
        );
    }

    #[test]
    fn test_multibyte_truncation_keeps_char_boundary() {
        let response = ReviewResponse::new(ReviewDecision::Reject, "€".repeat(600));
        assert!(response.explanation.starts_with('€'));
        assert_eq!(response.explanation.chars().count(), MAX_EXPLANATION_CHARS);
    }
}
