//! AI21 Jurassic-2 data models

use serde::{Deserialize, Serialize};

/// Jurassic-2 completion request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JurassicCompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

/// Generated text of a single completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurassicCompletionData {
    pub text: String,
}

/// Jurassic-2 completion entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurassicCompletion {
    pub data: JurassicCompletionData,
}

/// Jurassic-2 completion response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurassicCompletionResponse {
    pub completions: Vec<JurassicCompletion>,
}
