//! Model request adapter
//!
//! Turns a uniform `InvocationRequest` into a family-specific Bedrock body,
//! submits it through the injected `InferenceClient`, and normalizes the
//! response back into plain text. Also hosts the pass-through helpers for
//! the model catalog and the notification publisher.

use crate::conversion::request_converter::build_request_body;
use crate::conversion::response_converter::parse_response_body;
use crate::core::constants::media;
use crate::core::model_family::ModelFamily;
use crate::core::provider::{InferenceClient, ModelCatalog, NotificationPublisher};
use crate::models::catalog::{ModelSummary, PublishReceipt};
use crate::models::invocation::InvocationRequest;
use std::sync::Arc;
use thiserror::Error;
use tracing::{Instrument, debug, error, info, info_span};

/// Errors surfaced to the caller of the adapter
///
/// Provider call failures are not represented here; they are logged and
/// reported as an absent response.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Malformed {family} response: {reason}")]
    MalformedResponse { family: ModelFamily, reason: String },

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Adapter over a Bedrock-style inference client
pub struct ModelAdapter {
    client: Arc<dyn InferenceClient>,
}

impl ModelAdapter {
    /// Create a new adapter around the given inference client
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }

    /// Invoke a model and return its generated text
    ///
    /// Returns `Ok(None)` when the inference client fails; the failure is
    /// logged. Unsupported models and invalid parameters are rejected before
    /// any network call.
    ///
    /// # Errors
    ///
    /// - `UnsupportedModel` if the model id matches no known family
    /// - `InvalidParameters` if `max_tokens` is zero or the temperature is
    ///   negative or not finite
    /// - `MalformedResponse` if the provider answered with an unexpected body
    pub async fn invoke_model(
        &self,
        request: &InvocationRequest,
    ) -> Result<Option<String>, AdapterError> {
        let family = ModelFamily::from_model_id(&request.model_id)
            .ok_or_else(|| AdapterError::UnsupportedModel(request.model_id.clone()))?;
        validate_parameters(request)?;

        let request_id = uuid::Uuid::new_v4().to_string();
        let span = info_span!(
            "invoke_model",
            request_id = %request_id,
            model_id = %request.model_id,
            family = %family
        );

        self.submit(family, request).instrument(span).await
    }

    async fn submit(
        &self,
        family: ModelFamily,
        request: &InvocationRequest,
    ) -> Result<Option<String>, AdapterError> {
        let body = build_request_body(family, request)?;

        info!(
            "Invoking {} via {} (max_tokens={}, temperature={})",
            request.model_id,
            self.client.provider_name(),
            request.max_tokens,
            request.temperature
        );

        let payload = match self
            .client
            .invoke(&request.model_id, body, media::JSON, media::JSON)
            .await
        {
            Ok(payload) => payload,
            Err(e) => {
                error!("Error invoking model: {}", e);
                return Ok(None);
            }
        };

        debug!("Received {} byte response", payload.len());
        parse_response_body(family, &payload).map(Some)
    }
}

fn validate_parameters(request: &InvocationRequest) -> Result<(), AdapterError> {
    if request.max_tokens == 0 {
        return Err(AdapterError::InvalidParameters(
            "max_tokens must be greater than zero".to_string(),
        ));
    }

    if !request.temperature.is_finite() || request.temperature < 0.0 {
        return Err(AdapterError::InvalidParameters(format!(
            "temperature must be a non-negative number, got {}",
            request.temperature
        )));
    }

    Ok(())
}

/// List hosted models, logging and swallowing provider failures
pub async fn list_foundation_models(catalog: &dyn ModelCatalog) -> Option<Vec<ModelSummary>> {
    info!("Listing foundation models in {}", catalog.region());

    match catalog.list_models().await {
        Ok(models) => {
            debug!("Catalog returned {} models", models.len());
            Some(models)
        }
        Err(e) => {
            error!("Error listing models: {}", e);
            None
        }
    }
}

/// Publish a message, logging and swallowing provider failures
pub async fn send_notification(
    publisher: &dyn NotificationPublisher,
    topic: &str,
    message: &str,
    subject: Option<&str>,
) -> Option<PublishReceipt> {
    match publisher.publish(topic, message, subject).await {
        Ok(receipt) => {
            info!("Message sent successfully! Message ID: {}", receipt.message_id);
            Some(receipt)
        }
        Err(e) => {
            error!("Error sending message: {}", e);
            None
        }
    }
}
