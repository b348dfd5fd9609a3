//! Transport seam between the review providers and an LLM API

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One chat completion request: system directive, user message and output contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMRequest {
    /// Rendered user message
    pub prompt: String,

    /// Model identifier (e.g., "gpt-4.1")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Temperature for sampling (0.0 - 1.0)
    pub temperature: Option<f32>,

    /// Review directive sent as the system message
    pub system: Option<String>,

    /// Structured output contract the answer must follow (JSON schema)
    pub response_schema: Option<ResponseSchema>,
}

/// Named JSON schema for structured output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: serde_json::Value,
}

impl LLMRequest {
    /// Create a new LLM request
    pub fn new(prompt: String, model: String) -> Self {
        Self {
            prompt,
            model,
            max_tokens: None,
            temperature: None,
            system: None,
            response_schema: None,
        }
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set system message
    pub fn with_system(mut self, system: String) -> Self {
        self.system = Some(system);
        self
    }

    /// Request structured output matching `schema`
    pub fn with_response_schema(mut self, name: impl Into<String>, schema: serde_json::Value) -> Self {
        self.response_schema = Some(ResponseSchema {
            name: name.into(),
            schema,
        });
        self
    }
}

/// Raw completion returned by the transport, before verdict parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMResponse {
    /// Message content as returned by the model
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Number of tokens used
    pub tokens_used: u32,

    /// Finish reason (e.g., "stop", "length")
    pub finish_reason: String,
}

impl LLMResponse {
    /// Create a new LLM response
    pub fn new(content: String, model: String) -> Self {
        Self {
            content,
            model,
            tokens_used: 0,
            finish_reason: "stop".to_string(),
        }
    }

    /// Set tokens used
    pub fn with_tokens(mut self, tokens: u32) -> Self {
        self.tokens_used = tokens;
        self
    }

    /// Set finish reason
    pub fn with_finish_reason(mut self, reason: String) -> Self {
        self.finish_reason = reason;
        self
    }
}

/// Chat completion transport used by [`crate::provider::LiveProvider`]
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Send one completion request
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse>;

    /// Transport name, reported as the provider name
    fn name(&self) -> &str;
}
