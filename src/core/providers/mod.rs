//! Provider implementations backed by the AWS SDK

pub mod bedrock_catalog;
pub mod bedrock_runtime;
pub mod sns;

pub use bedrock_catalog::BedrockCatalog;
pub use bedrock_runtime::BedrockRuntimeProvider;
pub use sns::SnsPublisher;

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load shared AWS configuration for a region
///
/// Credentials come from the standard chain (environment variables,
/// `~/.aws/credentials`, IMDS, etc.).
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}
