//! Bedrock response to text conversion
//!
//! This module decodes the raw response payload of each supported model
//! family and extracts the generated text.

use crate::core::adapter::AdapterError;
use crate::core::constants::anthropic::NO_RESPONSE;
use crate::core::model_family::ModelFamily;
use crate::models::anthropic::AnthropicCompletionResponse;
use crate::models::jurassic::JurassicCompletionResponse;
use crate::models::titan::TitanTextResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract the generated text from a response payload
///
/// # Errors
///
/// Returns `AdapterError::MalformedResponse` if the payload is not valid JSON
/// of the expected shape, or if a result list is empty.
pub fn parse_response_body(family: ModelFamily, body: &[u8]) -> Result<String, AdapterError> {
    match family {
        ModelFamily::Anthropic => {
            let response: AnthropicCompletionResponse = decode(family, body)?;
            Ok(response
                .completion
                .unwrap_or_else(|| NO_RESPONSE.to_string()))
        }
        ModelFamily::Titan => {
            let response: TitanTextResponse = decode(family, body)?;
            response
                .results
                .into_iter()
                .next()
                .map(|result| result.output_text)
                .ok_or_else(|| malformed(family, "response contains no results"))
        }
        ModelFamily::Jurassic => {
            let response: JurassicCompletionResponse = decode(family, body)?;
            response
                .completions
                .into_iter()
                .next()
                .map(|completion| completion.data.text)
                .ok_or_else(|| malformed(family, "response contains no completions"))
        }
    }
}

fn decode<T: DeserializeOwned>(family: ModelFamily, body: &[u8]) -> Result<T, AdapterError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| malformed(family, &e.to_string()))?;
    if !value.is_object() {
        return Err(malformed(family, "response body is not a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| malformed(family, &e.to_string()))
}

fn malformed(family: ModelFamily, reason: &str) -> AdapterError {
    AdapterError::MalformedResponse {
        family,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anthropic_completion() {
        let text = parse_response_body(ModelFamily::Anthropic, br#"{"completion": "X"}"#).unwrap();
        assert_eq!(text, "X");
    }

    #[test]
    fn test_anthropic_missing_completion() {
        let text = parse_response_body(ModelFamily::Anthropic, b"{}").unwrap();
        assert_eq!(text, "No response");

        let text =
            parse_response_body(ModelFamily::Anthropic, br#"{"completion": null}"#).unwrap();
        assert_eq!(text, "No response");
    }

    #[test]
    fn test_titan_output_text() {
        let text = parse_response_body(
            ModelFamily::Titan,
            br#"{"inputTextTokenCount": 4, "results": [{"tokenCount": 1, "outputText": "Y", "completionReason": "FINISH"}]}"#,
        )
        .unwrap();
        assert_eq!(text, "Y");
    }

    #[test]
    fn test_titan_uses_first_result() {
        let text = parse_response_body(
            ModelFamily::Titan,
            br#"{"results": [{"outputText": "first"}, {"outputText": "second"}]}"#,
        )
        .unwrap();
        assert_eq!(text, "first");
    }

    #[test]
    fn test_titan_empty_results() {
        let err = parse_response_body(ModelFamily::Titan, br#"{"results": []}"#).unwrap_err();
        assert!(matches!(
            err,
            AdapterError::MalformedResponse {
                family: ModelFamily::Titan,
                ..
            }
        ));
    }

    #[test]
    fn test_jurassic_text() {
        let text = parse_response_body(
            ModelFamily::Jurassic,
            br#"{"id": 1234, "completions": [{"data": {"text": "Z"}, "finishReason": {"reason": "length"}}]}"#,
        )
        .unwrap();
        assert_eq!(text, "Z");
    }

    #[test]
    fn test_jurassic_empty_completions() {
        let err =
            parse_response_body(ModelFamily::Jurassic, br#"{"completions": []}"#).unwrap_err();
        assert!(matches!(err, AdapterError::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_object_bodies_are_malformed() {
        for body in [&b"[]"[..], b"null", b"\"text\"", b"42"] {
            let err = parse_response_body(ModelFamily::Anthropic, body).unwrap_err();
            assert!(matches!(
                err,
                AdapterError::MalformedResponse {
                    family: ModelFamily::Anthropic,
                    ..
                }
            ));
        }
        assert!(parse_response_body(ModelFamily::Titan, b"[]").is_err());
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_response_body(ModelFamily::Titan, b"not json").unwrap_err();
        assert!(err.to_string().contains("titan"));
    }
}
