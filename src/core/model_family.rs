//! Model family resolution
//!
//! Bedrock model identifiers carry the provider in their prefix. This module
//! maps an identifier to one of the supported request/response shapes once,
//! at the boundary, so everything downstream matches on the enum.

use crate::core::constants::family::{ANTHROPIC_MARKER, JURASSIC_MARKER, TITAN_MARKER};
use std::fmt;

/// Supported provider-specific request/response shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Anthropic,
    Titan,
    Jurassic,
}

impl ModelFamily {
    /// Resolve the family of a model identifier
    ///
    /// Markers are matched by substring in a fixed precedence: Anthropic,
    /// then Titan, then Jurassic. Returns `None` for anything else.
    pub fn from_model_id(model_id: &str) -> Option<Self> {
        if model_id.contains(ANTHROPIC_MARKER) {
            Some(ModelFamily::Anthropic)
        } else if model_id.contains(TITAN_MARKER) {
            Some(ModelFamily::Titan)
        } else if model_id.contains(JURASSIC_MARKER) {
            Some(ModelFamily::Jurassic)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelFamily::Anthropic => "anthropic",
            ModelFamily::Titan => "titan",
            ModelFamily::Jurassic => "jurassic",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_anthropic() {
        assert_eq!(
            ModelFamily::from_model_id("anthropic.claude-v2"),
            Some(ModelFamily::Anthropic)
        );
        assert_eq!(
            ModelFamily::from_model_id("us.anthropic.claude-instant-v1"),
            Some(ModelFamily::Anthropic)
        );
    }

    #[test]
    fn test_resolve_titan() {
        assert_eq!(
            ModelFamily::from_model_id("amazon.titan-text-express-v1"),
            Some(ModelFamily::Titan)
        );
    }

    #[test]
    fn test_resolve_jurassic() {
        assert_eq!(
            ModelFamily::from_model_id("ai21.j2-ultra-v1"),
            Some(ModelFamily::Jurassic)
        );
    }

    #[test]
    fn test_precedence_prefers_anthropic() {
        assert_eq!(
            ModelFamily::from_model_id("amazon.titan/anthropic.claude-v2"),
            Some(ModelFamily::Anthropic)
        );
        assert_eq!(
            ModelFamily::from_model_id("ai21.j2+amazon.titan"),
            Some(ModelFamily::Titan)
        );
    }

    #[test]
    fn test_unsupported_models() {
        assert_eq!(ModelFamily::from_model_id("meta.llama3-8b-instruct-v1:0"), None);
        assert_eq!(ModelFamily::from_model_id("ai21.jamba-instruct-v1:0"), None);
        assert_eq!(ModelFamily::from_model_id(""), None);
    }
}
