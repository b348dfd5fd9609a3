//! Mock review provider for testing and credential-less deployments

use super::{ProviderVerdict, ReviewProvider};
use crate::error::ProviderError;
use crate::model::ReviewDecision;
use crate::prompt::ReviewPrompt;
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

/// Rule group a rejection pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimCategory {
    FinancialScam,
    UnrealisticClaim,
    SuspiciousWording,
}

impl ClaimCategory {
    fn explanation(&self, phrase: &str) -> String {
        match self {
            ClaimCategory::FinancialScam => format!(
                "The listing shows financial scam indicators ('{}'), such as promised returns or risk-free investment claims.",
                phrase
            ),
            ClaimCategory::UnrealisticClaim => format!(
                "The listing makes unrealistic claims ('{}') that promise impossible or unproven results.",
                phrase
            ),
            ClaimCategory::SuspiciousWording => format!(
                "Product contains suspicious claims: '{}' - requires manual review.",
                phrase
            ),
        }
    }
}

struct ClaimRule {
    category: ClaimCategory,
    pattern: Regex,
}

// Checked in order; the first match decides the explanation.
const REJECT_PATTERNS: &[(ClaimCategory, &str)] = &[
    (ClaimCategory::FinancialScam, r"\d+(?:[.,]\d+)?\s*%\s*(?:(?:daily|weekly|monthly|annual|yearly)\s+)?(?:returns?|profits?|roi)\b"),
    (ClaimCategory::FinancialScam, r"guaranteed\s+(?:\d+(?:[.,]\d+)?\s*%\s*)?(?:returns?|profits?|income|earnings)\b"),
    (ClaimCategory::FinancialScam, r"risk[- ]free\s+(?:investment|returns?|profits?|trading|income)"),
    (ClaimCategory::FinancialScam, r"\bno\s+risk\b"),
    (ClaimCategory::FinancialScam, r"get[- ]rich[- ]quick"),
    (ClaimCategory::FinancialScam, r"\bturns?\s+[€$£]?\s*\d[\d,.]*\s*[€$£]?\s+into\s+[€$£]?\s*\d[\d,.]*"),
    (ClaimCategory::FinancialScam, r"\bdouble\s+your\s+money\b"),
    (ClaimCategory::UnrealisticClaim, r"\blose\s+\d+(?:[.,]\d+)?\s*(?:kg|kilos?|lbs?|pounds)\s+in\s+\d+\s*(?:days?|weeks?|hours?)"),
    (ClaimCategory::UnrealisticClaim, r"\bovernight\b"),
    (ClaimCategory::UnrealisticClaim, r"\bmiracle\b"),
    (ClaimCategory::UnrealisticClaim, r"\bsecret\s+formula\b"),
    (ClaimCategory::UnrealisticClaim, r"\bdoctors\s+hate\b"),
    (ClaimCategory::SuspiciousWording, r"100\s*%\s*guaranteed"),
    (ClaimCategory::SuspiciousWording, r"\bguaranteed\b"),
];

const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "evidence-based",
    "research",
    "psychology",
    "behavioral science",
    "course",
    "education",
    "strategy",
    "methodology",
];

fn reject_rules() -> &'static [ClaimRule] {
    static RULES: OnceLock<Vec<ClaimRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        REJECT_PATTERNS
            .iter()
            .map(|(category, pattern)| ClaimRule {
                category: *category,
                pattern: Regex::new(pattern).expect("reject patterns are valid regexes"),
            })
            .collect()
    })
}

/// Deterministic keyword-based reviewer.
///
/// Pure and infallible: the same product always gets the same verdict.
#[derive(Debug, Clone, Default)]
pub struct MockProvider;

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self
    }

    /// Review a product by keyword rules
    pub fn evaluate(&self, product_name: &str, sales_page: &str) -> ProviderVerdict {
        let content = format!("{} {}", product_name, sales_page).to_lowercase();

        for rule in reject_rules() {
            if let Some(found) = rule.pattern.find(&content) {
                return ProviderVerdict::new(
                    ReviewDecision::Reject,
                    rule.category.explanation(found.as_str().trim()),
                );
            }
        }

        if EDUCATIONAL_KEYWORDS.iter().any(|kw| content.contains(kw)) {
            ProviderVerdict::new(
                ReviewDecision::Approve,
                "Product appears educational and evidence-based.",
            )
        } else {
            ProviderVerdict::new(
                ReviewDecision::Approve,
                "No unrealistic claims or scam indicators were found in the product listing.",
            )
        }
    }
}

#[async_trait]
impl ReviewProvider for MockProvider {
    async fn review(&self, prompt: &ReviewPrompt) -> Result<ProviderVerdict, ProviderError> {
        Ok(self.evaluate(&prompt.product_name, &prompt.sales_page))
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn is_mock(&self) -> bool {
        true
    }
}
