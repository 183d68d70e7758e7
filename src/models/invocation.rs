//! Uniform invocation request
//!
//! Callers describe a generation with a model identifier, a prompt and two
//! optional parameters; the converters turn it into a family-specific body.

use crate::core::constants::generation::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// A single text-generation request, independent of model family
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub model_id: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl InvocationRequest {
    /// Create a request with the default generation parameters
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            prompt: prompt.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}
