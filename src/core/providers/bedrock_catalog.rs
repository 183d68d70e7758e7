//! Bedrock model catalog implementation

use crate::core::provider::{ModelCatalog, ProviderError};
use crate::models::catalog::ModelSummary;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrock::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_bedrock::types::{FoundationModelSummary, ModelModality};

/// Model catalog backed by the Bedrock `ListFoundationModels` API
pub struct BedrockCatalog {
    client: aws_sdk_bedrock::Client,
    region: String,
}

impl BedrockCatalog {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        let region = sdk_config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_default();

        Self {
            client: aws_sdk_bedrock::Client::new(sdk_config),
            region,
        }
    }
}

fn modality_names(modalities: &[ModelModality]) -> Vec<String> {
    modalities.iter().map(|m| m.as_str().to_string()).collect()
}

fn to_model_summary(summary: &FoundationModelSummary) -> ModelSummary {
    ModelSummary {
        model_id: summary.model_id().to_string(),
        model_name: summary.model_name().unwrap_or_default().to_string(),
        provider_name: summary.provider_name().map(str::to_string),
        input_modalities: modality_names(summary.input_modalities()),
        output_modalities: modality_names(summary.output_modalities()),
    }
}

#[async_trait]
impl ModelCatalog for BedrockCatalog {
    async fn list_models(&self) -> Result<Vec<ModelSummary>, ProviderError> {
        let output = self
            .client
            .list_foundation_models()
            .send()
            .await
            .map_err(|e| {
                ProviderError::from_service_code(e.code(), DisplayErrorContext(&e).to_string())
            })?;

        Ok(output
            .model_summaries()
            .iter()
            .map(to_model_summary)
            .collect())
    }

    fn region(&self) -> &str {
        &self.region
    }
}
