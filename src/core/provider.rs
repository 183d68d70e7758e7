//! Provider abstraction layer for the external AWS capabilities
//!
//! This module defines the narrow traits the adapter and the entry point
//! depend on (inference, model catalog, notification publishing) and the
//! error type every implementation reports through.

use crate::models::catalog::{ModelSummary, PublishReceipt};
use async_trait::async_trait;
use thiserror::Error;

/// Error types for provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: String, message: String },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ProviderError {
    /// Classify a service error by its AWS error code
    ///
    /// `message` is the full rendered error and is kept on every variant.
    pub fn from_service_code(code: Option<&str>, message: String) -> Self {
        let Some(code) = code else {
            return ProviderError::Unexpected(message);
        };

        match code {
            "AccessDeniedException"
            | "UnrecognizedClientException"
            | "ExpiredTokenException"
            | "InvalidSignatureException"
            | "AuthorizationError"
            | "InvalidClientTokenId" => ProviderError::Authentication(message),
            "ThrottlingException" | "ServiceQuotaExceededException" | "Throttled" => {
                ProviderError::RateLimit(message)
            }
            "ValidationException" | "InvalidParameter" | "InvalidParameterValue" => {
                ProviderError::BadRequest(message)
            }
            "ResourceNotFoundException" | "NotFound" => ProviderError::ModelNotFound(message),
            other => ProviderError::ApiError {
                code: other.to_string(),
                message,
            },
        }
    }
}

/// Executes a model invocation given a prepared body
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Submit `body` to `model_id` and return the raw response payload
    async fn invoke(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<Vec<u8>, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

/// Lists the foundation models hosted in a region
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    /// Fetch the summaries of every model available to the caller
    async fn list_models(&self) -> Result<Vec<ModelSummary>, ProviderError>;

    /// Region the catalog was queried in
    fn region(&self) -> &str;
}

/// Delivers a text message to a publish/subscribe topic
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Publish `message` to `topic` and return the provider's message id
    async fn publish(
        &self,
        topic: &str,
        message: &str,
        subject: Option<&str>,
    ) -> Result<PublishReceipt, ProviderError>;
}
