//! Live review provider backed by an LLM

use super::{ProviderVerdict, ReviewProvider};
use crate::client::{LLMClient, LLMRequest};
use crate::error::ProviderError;
use crate::model::ReviewDecision;
use crate::prompt::{ReviewPrompt, RESPONSE_SCHEMA_NAME};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Low temperature for consistent decisions
const TEMPERATURE: f32 = 0.2;

/// Decisions are short; cap the completion
const MAX_TOKENS: u32 = 150;

/// Sends review prompts to an LLM and parses the structured answer
pub struct LiveProvider {
    client: Arc<dyn LLMClient>,
    model: String,
    timeout: Duration,
}

impl LiveProvider {
    pub fn new(client: Arc<dyn LLMClient>, model: String, timeout: Duration) -> Self {
        Self {
            client,
            model,
            timeout,
        }
    }

    fn request(&self, prompt: &ReviewPrompt) -> LLMRequest {
        LLMRequest::new(prompt.user.clone(), self.model.clone())
            .with_system(prompt.system.to_string())
            .with_temperature(TEMPERATURE)
            .with_max_tokens(MAX_TOKENS)
            .with_response_schema(RESPONSE_SCHEMA_NAME, prompt.schema().clone())
    }
}

#[async_trait]
impl ReviewProvider for LiveProvider {
    async fn review(&self, prompt: &ReviewPrompt) -> Result<ProviderVerdict, ProviderError> {
        let request = self.request(prompt);

        let response = match tokio::time::timeout(self.timeout, self.client.call(request)).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!(client = self.client.name(), "LLM API error: {}", e);
                return Err(match ProviderError::from(e) {
                    ProviderError::Timeout(_) => ProviderError::Timeout(self.timeout),
                    other => other,
                });
            }
            Err(_) => {
                error!(
                    client = self.client.name(),
                    timeout_secs = self.timeout.as_secs_f64(),
                    "LLM API timeout"
                );
                return Err(ProviderError::Timeout(self.timeout));
            }
        };

        debug!(
            tokens = response.tokens_used,
            finish_reason = %response.finish_reason,
            "LLM review response received"
        );

        parse_verdict(&response.content).map_err(|e| {
            warn!("Unparseable review response: {}", e);
            e
        })
    }

    fn name(&self) -> &str {
        self.client.name()
    }
}

#[derive(Debug, Deserialize)]
struct RawVerdict {
    decision: String,
    explanation: String,
}

/// Parse the structured decision from raw model output.
///
/// Accepts a bare JSON object or one wrapped in a markdown code block.
pub fn parse_verdict(content: &str) -> Result<ProviderVerdict, ProviderError> {
    let json = extract_json(content).ok_or_else(|| {
        ProviderError::InvalidResponse("no JSON object in provider response".to_string())
    })?;

    let raw: RawVerdict = serde_json::from_str(json)
        .map_err(|e| ProviderError::InvalidResponse(format!("malformed decision payload: {}", e)))?;

    let decision = ReviewDecision::parse(&raw.decision).ok_or_else(|| {
        ProviderError::InvalidResponse(format!("unknown decision '{}'", raw.decision))
    })?;

    Ok(ProviderVerdict::new(decision, raw.explanation))
}

fn extract_json(content: &str) -> Option<&str> {
    let content = content.trim();

    // Pattern: ```json\n...\n``` or ```\n...\n```
    if let Some(start) = content.find("```") {
        let after_fence = &content[start + 3..];
        let after_fence = after_fence.strip_prefix("json").unwrap_or(after_fence);
        if let Some(end) = after_fence.find("```") {
            let fenced = after_fence[..end].trim();
            if fenced.starts_with('{') {
                return Some(fenced);
            }
        }
    }

    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (start < end).then(|| &content[start..=end])
}
