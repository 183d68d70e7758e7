//! Logging configuration and initialization
//!
//! Sets up the tracing subscriber used for structured logging throughout the
//! application. AWS SDK crates are kept at `warn` unless `RUST_LOG` says
//! otherwise.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Normalize a configured log level into a tracing filter directive
///
/// Only the first word is used so trailing comments are tolerated.
/// `warning` maps to `warn`, `critical` to `error`, and anything
/// unrecognized to `info`.
pub fn normalize_level(log_level: &str) -> &'static str {
    let level = log_level
        .split_whitespace()
        .next()
        .unwrap_or("info")
        .to_lowercase();

    match level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => "info",
    }
}

/// Initialize the logging system with the specified level
///
/// Only the first call per process has an effect.
pub fn init_logging(log_level: &str) {
    let level = normalize_level(log_level);

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "bedrock_connector={},aws_config=warn,aws_smithy_runtime=warn",
                level
            ))
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}
