//! Amazon Titan text data models

use serde::{Deserialize, Serialize};

/// Titan generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanTextGenerationConfig {
    pub max_token_count: u32,
    pub temperature: f64,
    pub top_p: f64,
}

/// Titan text request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanTextRequest {
    pub input_text: String,
    pub text_generation_config: TitanTextGenerationConfig,
}

/// Titan text result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanTextResult {
    pub output_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_reason: Option<String>,
}

/// Titan text response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitanTextResponse {
    pub results: Vec<TitanTextResult>,
}
