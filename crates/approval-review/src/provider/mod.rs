//! Review provider implementations
//!
//! A [`ReviewProvider`] turns a rendered [`ReviewPrompt`] into a verdict.
//! Two variants exist:
//! - [`LiveProvider`]: asks an LLM through any [`crate::client::LLMClient`], bounded by a timeout
//! - [`MockProvider`]: deterministic keyword rules, no network access

use crate::config::ReviewConfig;
use crate::error::{LLMError, ProviderError};
use crate::model::ReviewDecision;
use crate::prompt::ReviewPrompt;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

mod live;
mod mock;
mod openai;

pub use live::LiveProvider;
pub use mock::MockProvider;
pub use openai::OpenAIProvider;

/// Decision produced by a provider, before mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderVerdict {
    pub decision: ReviewDecision,
    pub explanation: String,
}

impl ProviderVerdict {
    pub fn new(decision: ReviewDecision, explanation: impl Into<String>) -> Self {
        Self {
            decision,
            explanation: explanation.into(),
        }
    }
}

/// Async review provider trait
#[async_trait]
pub trait ReviewProvider: Send + Sync {
    /// Produce a verdict for the prompt
    async fn review(&self, prompt: &ReviewPrompt) -> Result<ProviderVerdict, ProviderError>;

    /// Get the provider name
    fn name(&self) -> &str;

    /// Whether this provider is the deterministic mock
    fn is_mock(&self) -> bool {
        false
    }
}

/// Select the provider variant for this process.
///
/// The mock serves reviews when `use_mock` is set or no credential is configured.
pub fn build_provider(config: &ReviewConfig) -> Result<Arc<dyn ReviewProvider>, LLMError> {
    match config.credential() {
        Some(api_key) if !config.use_mock => {
            info!(model = %config.model, base_url = %config.base_url, "Using OpenAI review provider");
            let client = OpenAIProvider::with_timeout(
                api_key.to_string(),
                config.base_url.clone(),
                config.timeout,
            )?;
            Ok(Arc::new(LiveProvider::new(
                Arc::new(client),
                config.model.clone(),
                config.timeout,
            )))
        }
        _ => {
            info!(use_mock = config.use_mock, "Using mock review provider");
            Ok(Arc::new(MockProvider::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_provider_without_credential_is_mock() {
        let provider = build_provider(&ReviewConfig::default()).unwrap();
        assert!(provider.is_mock());
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn test_build_provider_mock_flag() {
        let config = ReviewConfig::new().with_api_key("sk-test").with_mock(true);
        let provider = build_provider(&config).unwrap();
        assert!(provider.is_mock());
    }

    #[test]
    fn test_build_provider_live() {
        let config = ReviewConfig::new().with_api_key("sk-test");
        let provider = build_provider(&config).unwrap();
        assert!(!provider.is_mock());
        assert_eq!(provider.name(), "openai");
    }
}
