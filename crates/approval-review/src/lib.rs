//! Product approval review core
//!
//! This crate decides whether a digital product may be listed for sale:
//! - Validation: length and non-emptiness checks on the incoming request
//! - Prompting: a fixed, versioned instruction and response schema
//! - Providers: a live LLM reviewer and a deterministic keyword mock
//! - Mapping: provider failures become a fail-closed `reject`
//!
//! # Example
//! ```no_run
//! use approval_review::{ReviewConfig, ReviewService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = ReviewService::from_config(&ReviewConfig::default())?;
//! let outcome = service
//!     .review(Some("Keto Mastery E-Book"), Some("Lose 15kg in 21 days guaranteed!"))
//!     .await?;
//! println!("{}: {}", outcome.response.decision, outcome.response.explanation);
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use config::ReviewConfig;
pub use error::{Field, LLMError, ProviderError, Result, ValidationError, ValidationKind};
pub use mapper::{map_outcome, ReviewOutcome, FAIL_CLOSED_EXPLANATION};
pub use model::{ReviewDecision, ReviewRequest, ReviewResponse};
pub use prompt::{PromptBuilder, ReviewPrompt};
pub use service::ReviewService;
pub use validator::{validate_review, ReviewLimits};

// Re-export providers
pub use provider::{
    build_provider, LiveProvider, MockProvider, OpenAIProvider, ProviderVerdict, ReviewProvider,
};

pub mod client;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod prompt;
pub mod provider;
pub mod service;
pub mod validator;
