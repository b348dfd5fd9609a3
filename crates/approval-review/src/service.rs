//! Review pipeline orchestration
//!
//! `Received → Validated → Prompted → Provider-Called → {Decided | Failed} → Responded`

use crate::config::ReviewConfig;
use crate::error::{LLMError, ValidationError};
use crate::mapper::{map_outcome, ReviewOutcome};
use crate::prompt::PromptBuilder;
use crate::provider::{build_provider, ReviewProvider};
use crate::validator::{validate_review, ReviewLimits};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Stateless review service, shared across requests
pub struct ReviewService {
    provider: Arc<dyn ReviewProvider>,
    limits: ReviewLimits,
    prompts: PromptBuilder,
}

impl ReviewService {
    /// Create a service around an explicit provider
    pub fn new(provider: Arc<dyn ReviewProvider>, limits: ReviewLimits) -> Self {
        Self {
            provider,
            prompts: PromptBuilder::new().with_max_sales_chars(limits.sales_page_max),
            limits,
        }
    }

    /// Create a service with the provider selected by `config`
    pub fn from_config(config: &ReviewConfig) -> Result<Self, LLMError> {
        let provider = build_provider(config)?;
        Ok(Self::new(
            provider,
            ReviewLimits::with_max_content_length(config.max_content_length),
        ))
    }

    /// Name of the active provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Whether reviews are served by the mock provider
    pub fn is_mock(&self) -> bool {
        self.provider.is_mock()
    }

    /// Limits applied to incoming requests
    pub fn limits(&self) -> &ReviewLimits {
        &self.limits
    }

    /// Review one product.
    ///
    /// Validation failures stop the pipeline before the provider is called.
    /// Provider failures never surface as `Err`; they come back as a
    /// fail-closed [`ReviewOutcome`].
    pub async fn review(
        &self,
        product_name: Option<&str>,
        sales_page: Option<&str>,
    ) -> Result<ReviewOutcome, ValidationError> {
        let request = validate_review(product_name, sales_page, &self.limits)?;
        info!(
            product = %preview(request.product_name()),
            sales_page_chars = request.sales_page().chars().count(),
            "Reviewing product"
        );

        let prompt = self.prompts.build(&request);
        debug!(version = prompt.version, "Prompt rendered");

        let outcome = map_outcome(self.provider.review(&prompt).await);
        match &outcome.failure {
            None => info!(
                decision = %outcome.response.decision,
                provider = self.provider.name(),
                "Review completed"
            ),
            Some(err) => warn!(
                provider = self.provider.name(),
                "Review failed, rejecting for safety: {}",
                err
            ),
        }

        Ok(outcome)
    }
}

fn preview(name: &str) -> String {
    name.chars().take(50).collect()
}
