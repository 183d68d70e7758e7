//! Anthropic Claude text-completion data models
//!
//! Request and response bodies for `anthropic.claude*` models invoked through
//! the Bedrock `InvokeModel` API.

use serde::{Deserialize, Serialize};

/// Anthropic text-completion request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicCompletionRequest {
    pub prompt: String,
    pub max_tokens_to_sample: u32,
    pub temperature: f64,
    pub stop_sequences: Vec<String>,
}

/// Anthropic text-completion response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnthropicCompletionResponse {
    #[serde(default)]
    pub completion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
}
