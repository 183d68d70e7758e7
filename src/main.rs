//! Amazon Bedrock connector
//!
//! Lists the foundation models hosted in a region, invokes Anthropic, Titan
//! or Jurassic text models through a uniform request, and publishes the
//! generated text to an SNS topic.

mod conversion;
mod core;
mod models;

use crate::core::adapter::{ModelAdapter, list_foundation_models, send_notification};
use crate::core::config::Config;
use crate::core::logging::init_logging;
use crate::core::provider::{InferenceClient, ModelCatalog, NotificationPublisher};
use crate::core::providers::{BedrockCatalog, BedrockRuntimeProvider, SnsPublisher, load_sdk_config};
use crate::models::catalog::render_model_listing;
use crate::models::invocation::InvocationRequest;
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

/// Model used by the demo invocations
const DEMO_MODEL_ID: &str = "amazon.titan-text-express-v1";

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    dotenv::dotenv().ok();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);
    print_startup_banner(&config);

    if let Err(e) = run(&config).await {
        error!("Error in main: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<()> {
    let sdk_config = load_sdk_config(&config.region).await;

    let inference: Arc<dyn InferenceClient> = Arc::new(BedrockRuntimeProvider::new(
        &sdk_config,
        config.endpoint_url.as_deref(),
    ));
    let catalog: Arc<dyn ModelCatalog> = Arc::new(BedrockCatalog::new(&sdk_config));
    let adapter = ModelAdapter::new(inference.clone());

    info!("Using provider: {}", inference.provider_name());

    println!("📋 Listing available models...");
    if let Some(models) = list_foundation_models(catalog.as_ref()).await {
        print!("{}", render_model_listing(catalog.region(), &models));
    }

    let [explain, poem_request] = demo_requests();

    println!(
        "\nInvoking {} with prompt: '{}'",
        explain.model_id, explain.prompt
    );
    let response = adapter.invoke_model(&explain).await?;
    println!("\nModel Response:");
    print_response(response.as_deref());

    println!("\nInvoking {} with a poem prompt...", poem_request.model_id);
    let poem = adapter.invoke_model(&poem_request).await?;
    println!("\nTitan Response:");
    print_response(poem.as_deref());

    match (&config.topic_arn, poem) {
        (Some(topic_arn), Some(text)) => {
            let sns_config = load_sdk_config(&config.notification_region).await;
            let publisher: Arc<dyn NotificationPublisher> =
                Arc::new(SnsPublisher::new(&sns_config));
            send_notification(
                publisher.as_ref(),
                topic_arn,
                &text,
                Some(&config.notification_subject),
            )
            .await;
        }
        (Some(_), None) => info!("No model output to publish"),
        (None, _) => info!("No notification topic configured, skipping publish"),
    }

    Ok(())
}

/// The two invocations made by the demo flow, in order
fn demo_requests() -> [InvocationRequest; 2] {
    [
        InvocationRequest::new(DEMO_MODEL_ID, "Explain quantum computing in simple terms.")
            .with_max_tokens(500)
            .with_temperature(0.7),
        InvocationRequest::new(DEMO_MODEL_ID, "Write a short poem about AI")
            .with_max_tokens(200)
            .with_temperature(0.8),
    ]
}

fn print_response(response: Option<&str>) {
    match response {
        Some(text) => println!("{}", text),
        None => println!("None"),
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🚀 Bedrock Connector v0.1.0");
    println!("✅ Configuration loaded successfully");
    println!("   Region: {}", config.region);
    if let Some(ref endpoint) = config.endpoint_url {
        println!("   Endpoint: {}", endpoint);
    }
    println!(
        "   Notification Topic: {}",
        config.topic_arn.as_deref().unwrap_or("Disabled")
    );
    println!();
}

/// Print help message
fn print_help() {
    println!("Bedrock Connector v0.1.0");
    println!();
    println!("Usage: bedrock-connector [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  CONFIG_PATH - Path to the TOML configuration (default: config.toml)");
    println!("  RUST_LOG - Overrides the configured log filter");
    println!();
    println!("AWS credentials are read from the standard chain:");
    println!("  AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY / AWS_SESSION_TOKEN");
    println!("  AWS_PROFILE - Named profile from ~/.aws/credentials");
    println!();
    println!("Configuration sections:");
    println!("  [aws] region (default: eu-central-1), endpoint_url");
    println!("  [notification] topic_arn, region, subject (default: SNS Notification)");
    println!("  [logging] log_level (default: info)");
    println!();
    println!("Supported model families:");
    println!("  anthropic.claude*  -> Anthropic text completions");
    println!("  amazon.titan*      -> Amazon Titan text");
    println!("  ai21.j2*           -> AI21 Jurassic-2");
}
