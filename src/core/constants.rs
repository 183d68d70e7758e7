//! Constants for model families, wire headers and generation defaults
//!
//! This module defines the string and numeric constants shared by the
//! request/response converters, the adapter and the demo entry point.

/// Model identifier markers used to resolve a model family
pub mod family {
    /// Anthropic Claude text-completion models
    pub const ANTHROPIC_MARKER: &str = "anthropic.claude";

    /// Amazon Titan text models
    pub const TITAN_MARKER: &str = "amazon.titan";

    /// AI21 Jurassic-2 models
    pub const JURASSIC_MARKER: &str = "ai21.j2";
}

/// Content negotiation constants
pub mod media {
    /// JSON media type, used for both content-type and accept
    pub const JSON: &str = "application/json";
}

/// Anthropic text-completion prompt framing
pub mod anthropic {
    /// Human turn prefix
    pub const HUMAN_PREFIX: &str = "\n\nHuman: ";

    /// Assistant turn suffix
    pub const ASSISTANT_SUFFIX: &str = "\n\nAssistant:";

    /// Stop sequence ending the assistant turn
    pub const STOP_SEQUENCE: &str = "\n\nHuman:";

    /// Returned when the response carries no completion
    pub const NO_RESPONSE: &str = "No response";
}

/// Generation parameter defaults
pub mod generation {
    /// Default maximum number of tokens to generate
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;

    /// Default sampling temperature
    pub const DEFAULT_TEMPERATURE: f64 = 0.5;

    /// Fixed nucleus sampling value sent to Titan and Jurassic models
    pub const FIXED_TOP_P: f64 = 0.9;
}

/// Notification defaults
pub mod notification {
    /// Subject line attached to published messages
    pub const DEFAULT_SUBJECT: &str = "SNS Notification";
}

/// Default AWS region
pub const DEFAULT_REGION: &str = "eu-central-1";
