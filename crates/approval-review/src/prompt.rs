//! Prompt templates and the structured output contract
//!
//! The system directive, user template and response schema are fixed per
//! [`PROMPT_VERSION`]; building a prompt only substitutes the request fields.

use crate::config::DEFAULT_MAX_CONTENT_LENGTH;
use crate::model::{ReviewRequest, MAX_EXPLANATION_CHARS};
use serde_json::json;
use std::sync::OnceLock;

/// Version of the prompt and schema contract
pub const PROMPT_VERSION: &str = "2025-01";

/// Name under which the response schema is declared to the provider
pub const RESPONSE_SCHEMA_NAME: &str = "product_review";

/// Marker appended to sales copy cut to fit the prompt
pub const TRUNCATION_MARKER: &str = "\n[truncated]";

/// System directive for product reviews
pub const SYSTEM_PROMPT: &str = r#"You are an expert product reviewer for an online sales platform. Your job is to analyze digital products and determine if they should be approved or rejected based on compliance, quality, and legal validity.

CRITICAL REJECTION CRITERIA:
1. **Unrealistic Claims**: Products promising impossible results (lose 15kg in 21 days, turn €100 into €10,000 overnight)
2. **Financial Scams**: Get-rich-quick schemes, guaranteed investment returns, cryptocurrency "sure bets"
3. **Health Misinformation**: Unproven medical claims, dangerous diet advice, miracle cures
4. **Illegal Content**: Copyrighted material, adult content, illegal activities
5. **Low Quality**: Poor grammar, unprofessional presentation, vague descriptions

APPROVAL CRITERIA:
1. **Evidence-Based**: Claims backed by research, testimonials, or proven methods
2. **Professional**: Well-written, clear value proposition, realistic expectations
3. **Educational**: Provides genuine knowledge, skills, or entertainment value
4. **Compliant**: Follows advertising standards and legal requirements

Be decisive but fair. When in doubt about borderline cases, lean toward approval if the product provides genuine value.

Respond with a JSON object containing:
- "decision": either "approve" or "reject"
- "explanation": 1-3 sentences justifying the decision"#;

/// User message template
pub const USER_PROMPT_TEMPLATE: &str = r#"Please review this digital product for approval on our platform:

PRODUCT NAME: {product_name}

SALES PAGE CONTENT:
{sales_page}

Analyze this product against our criteria and provide your decision with explanation."#;

/// JSON schema every provider answer must conform to.
///
/// Sent as a strict structured-output contract, so it only uses keywords
/// strict mode accepts. The explanation length cap lives in
/// `ReviewResponse::new`.
pub fn response_schema() -> &'static serde_json::Value {
    static SCHEMA: OnceLock<serde_json::Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        json!({
            "type": "object",
            "properties": {
                "decision": {
                    "type": "string",
                    "enum": ["approve", "reject"]
                },
                "explanation": {
                    "type": "string",
                    "description": format!(
                        "1-3 sentence explanation of the decision, at most {} characters",
                        MAX_EXPLANATION_CHARS
                    )
                }
            },
            "required": ["decision", "explanation"],
            "additionalProperties": false
        })
    })
}

/// Rendered prompt, ready for any provider variant
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPrompt {
    /// Fixed system directive
    pub system: &'static str,
    /// User message with the product fields substituted
    pub user: String,
    /// Contract version
    pub version: &'static str,
    /// Product name as validated
    pub product_name: String,
    /// Sales copy as sent to the provider (possibly truncated)
    pub sales_page: String,
}

impl ReviewPrompt {
    /// Expected output schema
    pub fn schema(&self) -> &'static serde_json::Value {
        response_schema()
    }
}

/// Renders validated requests into [`ReviewPrompt`]s
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    max_sales_chars: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            max_sales_chars: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the sales copy embedded in the prompt
    pub fn with_max_sales_chars(mut self, max: usize) -> Self {
        self.max_sales_chars = max;
        self
    }

    /// Render the prompt for a validated request
    pub fn build(&self, request: &ReviewRequest) -> ReviewPrompt {
        let sales_page = truncate_chars(request.sales_page(), self.max_sales_chars);
        let user = render(
            USER_PROMPT_TEMPLATE,
            &[
                ("{product_name}", request.product_name()),
                ("{sales_page}", &sales_page),
            ],
        );

        ReviewPrompt {
            system: SYSTEM_PROMPT,
            user,
            version: PROMPT_VERSION,
            product_name: request.product_name().to_string(),
            sales_page,
        }
    }
}

/// Single-pass placeholder substitution; substituted values are never rescanned
fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{validate_review, ReviewLimits};

    fn request(name: &str, page: &str) -> ReviewRequest {
        validate_review(Some(name), Some(page), &ReviewLimits::default()).unwrap()
    }

    #[test]
    fn test_prompt_contains_fields_verbatim() {
        let prompt = PromptBuilder::new().build(&request(
            "Keto Mastery E-Book",
            "Lose 15kg in 21 days guaranteed!",
        ));

        assert!(prompt.user.contains("PRODUCT NAME: Keto Mastery E-Book"));
        assert!(prompt.user.contains("Lose 15kg in 21 days guaranteed!"));
        assert_eq!(prompt.system, SYSTEM_PROMPT);
        assert_eq!(prompt.version, PROMPT_VERSION);
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let builder = PromptBuilder::new();
        let req = request("Course", "Evidence-based strategies for focus.");
        assert_eq!(builder.build(&req), builder.build(&req));
    }

    #[test]
    fn test_system_prompt_lists_criteria() {
        for criterion in [
            "Unrealistic Claims",
            "Financial Scams",
            "Health Misinformation",
            "Illegal Content",
            "Low Quality",
            "Evidence-Based",
            "Professional",
            "Educational",
            "Compliant",
        ] {
            assert!(SYSTEM_PROMPT.contains(criterion), "missing {}", criterion);
        }
    }

    #[test]
    fn test_response_schema_shape() {
        let schema = response_schema();
        assert_eq!(
            schema["properties"]["decision"]["enum"],
            json!(["approve", "reject"])
        );
        assert_eq!(schema["properties"]["explanation"]["type"], "string");
        assert_eq!(schema["required"], json!(["decision", "explanation"]));
        assert_eq!(schema["additionalProperties"], false);
        assert!(std::ptr::eq(schema, response_schema()));
    }

    fn collect_keywords(node: &serde_json::Value, out: &mut Vec<String>) {
        if let Some(map) = node.as_object() {
            for (key, value) in map {
                out.push(key.clone());
                if key == "properties" {
                    for property in value.as_object().into_iter().flat_map(|p| p.values()) {
                        collect_keywords(property, out);
                    }
                }
            }
        }
    }

    #[test]
    fn test_response_schema_is_strict_mode_compatible() {
        const ALLOWED: &[&str] = &[
            "type",
            "properties",
            "required",
            "additionalProperties",
            "enum",
            "description",
            "pattern",
            "format",
        ];

        let mut keywords = Vec::new();
        collect_keywords(response_schema(), &mut keywords);

        assert!(keywords.iter().any(|k| k == "enum"));
        for keyword in &keywords {
            assert!(
                ALLOWED.contains(&keyword.as_str()),
                "keyword '{}' is rejected by strict structured output",
                keyword
            );
        }
        assert!(response_schema()["properties"]["explanation"]["description"]
            .as_str()
            .unwrap()
            .contains("500"));
    }

    #[test]
    fn test_long_sales_copy_is_truncated() {
        let builder = PromptBuilder::new().with_max_sales_chars(20);
        let prompt = builder.build(&request("Name", &"€".repeat(50)));

        assert_eq!(prompt.sales_page, format!("{}{}", "€".repeat(20), TRUNCATION_MARKER));
        assert!(prompt.user.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn test_placeholders_in_fields_are_literal() {
        let prompt = PromptBuilder::new().build(&request(
            "{sales_page}",
            "Copy mentioning {product_name} literally.",
        ));
        assert!(prompt.user.contains("PRODUCT NAME: {sales_page}"));
        assert!(prompt.user.contains("Copy mentioning {product_name} literally."));
    }
}
