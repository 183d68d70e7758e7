//! SNS notification publisher implementation

use crate::core::provider::{NotificationPublisher, ProviderError};
use crate::models::catalog::PublishReceipt;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata};
use tracing::debug;

/// Notification publisher backed by the SNS `Publish` API
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    /// Create a publisher for the region carried by `sdk_config`
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_sns::Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl NotificationPublisher for SnsPublisher {
    async fn publish(
        &self,
        topic: &str,
        message: &str,
        subject: Option<&str>,
    ) -> Result<PublishReceipt, ProviderError> {
        debug!("Publishing {} bytes to {}", message.len(), topic);

        let output = self
            .client
            .publish()
            .topic_arn(topic)
            .message(message)
            .set_subject(subject.map(str::to_string))
            .send()
            .await
            .map_err(|e| {
                ProviderError::from_service_code(e.code(), DisplayErrorContext(&e).to_string())
            })?;

        let message_id = output.message_id().ok_or_else(|| {
            ProviderError::Unexpected("Publish returned no message id".to_string())
        })?;

        Ok(PublishReceipt {
            message_id: message_id.to_string(),
        })
    }
}
