//! Bedrock runtime provider implementation

use crate::core::provider::{InferenceClient, ProviderError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_smithy_types::Blob;
use tracing::{debug, info};

/// Inference client backed by the Bedrock `InvokeModel` API
pub struct BedrockRuntimeProvider {
    client: aws_sdk_bedrockruntime::Client,
    region: String,
}

impl BedrockRuntimeProvider {
    /// Create a new Bedrock runtime provider
    ///
    /// # Arguments
    ///
    /// * `sdk_config` - Shared AWS configuration (region and credentials)
    /// * `endpoint_url` - Optional endpoint override, e.g. a VPC endpoint
    pub fn new(sdk_config: &SdkConfig, endpoint_url: Option<&str>) -> Self {
        let mut builder = aws_sdk_bedrockruntime::config::Builder::from(sdk_config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }

        let region = sdk_config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_default();

        info!("Bedrock runtime client created for region={}", region);

        Self {
            client: aws_sdk_bedrockruntime::Client::from_conf(builder.build()),
            region,
        }
    }
}

#[async_trait]
impl InferenceClient for BedrockRuntimeProvider {
    async fn invoke(
        &self,
        model_id: &str,
        body: Vec<u8>,
        content_type: &str,
        accept: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        debug!(
            "InvokeModel model={} region={} ({} byte body)",
            model_id,
            self.region,
            body.len()
        );

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(content_type)
            .accept(accept)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                ProviderError::from_service_code(e.code(), DisplayErrorContext(&e).to_string())
            })?;

        Ok(output.body.into_inner())
    }

    fn provider_name(&self) -> &str {
        "Amazon Bedrock"
    }
}
