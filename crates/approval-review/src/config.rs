//! Review configuration

use std::time::Duration;

/// Default OpenAI model used for reviews
pub const DEFAULT_MODEL: &str = "gpt-4.1";

/// Default OpenAI-compatible API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default provider timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum sales page length in characters
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 10_000;

/// Provider and limit configuration for the review pipeline.
///
/// Loaded once at startup and handed to [`crate::ReviewService::from_config`].
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// API credential; the mock provider is used when absent or empty
    pub api_key: Option<String>,

    /// Model identifier
    pub model: String,

    /// OpenAI-compatible API base URL
    pub base_url: String,

    /// Provider call timeout
    pub timeout: Duration,

    /// Force the deterministic mock provider
    pub use_mock: bool,

    /// Maximum sales page length in characters
    pub max_content_length: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            use_mock: false,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

impl ReviewConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the provider timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Force mock mode
    pub fn with_mock(mut self, use_mock: bool) -> Self {
        self.use_mock = use_mock;
        self
    }

    /// Set the maximum sales page length
    pub fn with_max_content_length(mut self, max: usize) -> Self {
        self.max_content_length = max;
        self
    }

    /// Credential, if one is configured and non-blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Whether the mock provider will serve reviews
    pub fn mock_enabled(&self) -> bool {
        self.use_mock || self.credential().is_none()
    }
}
