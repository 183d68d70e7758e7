//! Uniform request to Bedrock body conversion
//!
//! This module converts an `InvocationRequest` into the JSON body expected by
//! each supported model family, wrapping the prompt and mapping parameters.

use crate::core::constants::anthropic::{ASSISTANT_SUFFIX, HUMAN_PREFIX, STOP_SEQUENCE};
use crate::core::constants::generation::FIXED_TOP_P;
use crate::core::model_family::ModelFamily;
use crate::models::anthropic::AnthropicCompletionRequest;
use crate::models::invocation::InvocationRequest;
use crate::models::jurassic::JurassicCompletionRequest;
use crate::models::titan::{TitanTextGenerationConfig, TitanTextRequest};
use tracing::debug;

/// Serialize the request body for the given family
///
/// # Errors
///
/// Returns the serializer error if the body cannot be encoded.
pub fn build_request_body(
    family: ModelFamily,
    request: &InvocationRequest,
) -> Result<Vec<u8>, serde_json::Error> {
    let body = match family {
        ModelFamily::Anthropic => serde_json::to_vec(&convert_to_anthropic(request))?,
        ModelFamily::Titan => serde_json::to_vec(&convert_to_titan(request))?,
        ModelFamily::Jurassic => serde_json::to_vec(&convert_to_jurassic(request))?,
    };

    debug!("Converted request to {} body ({} bytes)", family, body.len());
    Ok(body)
}

/// Convert to an Anthropic text-completion body
///
/// The prompt is framed as a single Human/Assistant exchange and generation
/// stops at the next Human turn.
pub fn convert_to_anthropic(request: &InvocationRequest) -> AnthropicCompletionRequest {
    AnthropicCompletionRequest {
        prompt: format!("{}{}{}", HUMAN_PREFIX, request.prompt, ASSISTANT_SUFFIX),
        max_tokens_to_sample: request.max_tokens,
        temperature: request.temperature,
        stop_sequences: vec![STOP_SEQUENCE.to_string()],
    }
}

/// Convert to a Titan text body
pub fn convert_to_titan(request: &InvocationRequest) -> TitanTextRequest {
    TitanTextRequest {
        input_text: request.prompt.clone(),
        text_generation_config: TitanTextGenerationConfig {
            max_token_count: request.max_tokens,
            temperature: request.temperature,
            top_p: FIXED_TOP_P,
        },
    }
}

/// Convert to a Jurassic-2 completion body
pub fn convert_to_jurassic(request: &InvocationRequest) -> JurassicCompletionRequest {
    JurassicCompletionRequest {
        prompt: request.prompt.clone(),
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        top_p: FIXED_TOP_P,
    }
}
