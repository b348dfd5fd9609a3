//! Server configuration

use approval_review::config::{
    DEFAULT_BASE_URL, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use approval_review::ReviewConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Server configuration
///
/// Field names match the environment variables they are read from
/// (`OPENAI_API_KEY`, `USE_MOCK_AI`, `PORT`, ...).
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level for the service crates
    pub log_level: String,

    /// Enable debug logging
    pub debug: bool,

    /// OpenAI API key; without one the mock reviewer is used
    pub openai_api_key: Option<String>,

    /// OpenAI model used for reviews
    pub openai_model: String,

    /// OpenAI-compatible API base URL
    pub openai_base_url: String,

    /// OpenAI API timeout in seconds
    pub openai_timeout: u64,

    /// Use the mock reviewer instead of OpenAI
    pub use_mock_ai: bool,

    /// Maximum sales page content length
    pub max_content_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            debug: false,
            openai_api_key: None,
            openai_model: DEFAULT_MODEL.to_string(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_timeout: DEFAULT_TIMEOUT_SECS,
            use_mock_ai: false,
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
        }
    }
}

// Keeps the credential out of startup logs
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("debug", &self.debug)
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_timeout", &self.openai_timeout)
            .field("use_mock_ai", &self.use_mock_ai)
            .field("max_content_length", &self.max_content_length)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::default().try_parsing(true))
            .build();

        match config_result {
            Ok(cfg) => Self::from_config(cfg),
            Err(e) => {
                tracing::info!("No usable configuration source ({}), using defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Deserialize from an already-built configuration
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Review configuration handed to the review service
    pub fn review_config(&self) -> ReviewConfig {
        ReviewConfig {
            api_key: self.openai_api_key.clone(),
            model: self.openai_model.clone(),
            base_url: self.openai_base_url.clone(),
            timeout: Duration::from_secs(self.openai_timeout),
            use_mock: self.use_mock_ai,
            max_content_length: self.max_content_length,
        }
    }

    /// Default tracing filter directives
    pub fn log_filter(&self) -> String {
        let level = if self.debug { "debug" } else { self.log_level.as_str() };
        format!(
            "approval_server={level},approval_review={level},tower_http=debug",
            level = level
        )
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert!(!config.debug);
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.openai_model, "gpt-4.1");
        assert_eq!(config.openai_timeout, 30);
        assert!(!config.use_mock_ai);
        assert_eq!(config.max_content_length, 10_000);
    }

    #[test]
    fn test_from_config_overrides() {
        let cfg = config::Config::builder()
            .set_override("port", 9000)
            .unwrap()
            .set_override("openai_timeout", 5)
            .unwrap()
            .set_override("use_mock_ai", true)
            .unwrap()
            .set_override("openai_api_key", "sk-test")
            .unwrap()
            .build()
            .unwrap();

        let config = ServerConfig::from_config(cfg).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.openai_timeout, 5);
        assert!(config.use_mock_ai);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        // untouched fields keep their defaults
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_content_length, 10_000);
    }

    #[test]
    fn test_from_config_rejects_bad_types() {
        let cfg = config::Config::builder()
            .set_override("port", "not-a-port")
            .unwrap()
            .build()
            .unwrap();

        assert!(ServerConfig::from_config(cfg).is_err());
    }

    #[test]
    fn test_review_config_mapping() {
        let config = ServerConfig {
            openai_api_key: Some("sk-test".to_string()),
            openai_model: "gpt-4o-mini".to_string(),
            openai_timeout: 12,
            max_content_length: 5000,
            ..ServerConfig::default()
        };

        let review = config.review_config();
        assert_eq!(review.credential(), Some("sk-test"));
        assert_eq!(review.model, "gpt-4o-mini");
        assert_eq!(review.timeout, Duration::from_secs(12));
        assert_eq!(review.max_content_length, 5000);
        assert!(!review.mock_enabled());
    }

    #[test]
    fn test_log_filter_debug_flag() {
        let mut config = ServerConfig::default();
        assert!(config.log_filter().starts_with("approval_server=info"));

        config.debug = true;
        assert!(config.log_filter().contains("approval_review=debug"));
    }

    #[test]
    fn test_debug_format_redacts_key() {
        let config = ServerConfig {
            openai_api_key: Some("sk-secret".to_string()),
            ..ServerConfig::default()
        };
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("ServerConfig"));
        assert!(debug_str.contains("<redacted>"));
        assert!(!debug_str.contains("sk-secret"));
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
