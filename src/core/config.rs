//! Application configuration management
//!
//! This module handles loading and validating configuration from TOML files.
//! All configuration is validated at startup.

use crate::core::constants::notification::DEFAULT_SUBJECT;
use crate::core::constants::DEFAULT_REGION;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the current directory
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AwsConfig {
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub topic_arn: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default = "default_subject")]
    pub subject: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub aws: Option<AwsConfig>,
    #[serde(default)]
    pub notification: Option<NotificationConfig>,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

/// Application configuration loaded from TOML files
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// AWS region for Bedrock calls
    pub region: String,

    /// Optional Bedrock runtime endpoint override
    pub endpoint_url: Option<String>,

    /// SNS topic to publish results to; publishing is skipped when unset
    pub topic_arn: Option<String>,

    /// Region of the SNS topic
    pub notification_region: String,

    /// Subject attached to published messages
    pub notification_subject: String,

    /// Logging level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default())
    }
}

impl Config {
    /// Load configuration from TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The TOML file cannot be read or parsed
    /// - Configuration values are invalid
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let toml_config: TomlConfig =
            toml::from_str(content).context("Failed to parse TOML configuration")?;

        let config = Self::from_toml(toml_config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment and config file
    ///
    /// Reads the file named by `CONFIG_PATH`. Without `CONFIG_PATH`, looks
    /// for config.toml in the current directory and falls back to defaults
    /// when it does not exist.
    pub fn from_env() -> Result<Self> {
        match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::from_file(path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    fn from_toml(config: TomlConfig) -> Self {
        let aws = config.aws.unwrap_or_else(|| AwsConfig {
            region: default_region(),
            endpoint_url: None,
        });
        let notification = config.notification.unwrap_or_else(|| NotificationConfig {
            topic_arn: None,
            region: None,
            subject: default_subject(),
        });
        let logging = config.logging.unwrap_or_else(|| LoggingConfig {
            log_level: default_log_level(),
        });

        Config {
            notification_region: notification
                .region
                .unwrap_or_else(|| aws.region.clone()),
            region: aws.region,
            endpoint_url: aws.endpoint_url,
            topic_arn: notification.topic_arn.filter(|arn| !arn.trim().is_empty()),
            notification_subject: notification.subject,
            log_level: logging.log_level,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            bail!("aws.region must not be empty");
        }
        if self.notification_region.trim().is_empty() {
            bail!("notification.region must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [aws]
            region = "us-east-1"
            endpoint_url = "https://bedrock-runtime.us-east-1.amazonaws.com"

            [notification]
            topic_arn = "arn:aws:sns:eu-central-1:123456789012:myNotify"
            region = "eu-central-1"

            [logging]
            log_level = "debug"
        "#
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(
            config.endpoint_url.as_deref(),
            Some("https://bedrock-runtime.us-east-1.amazonaws.com")
        );
        assert_eq!(
            config.topic_arn.as_deref(),
            Some("arn:aws:sns:eu-central-1:123456789012:myNotify")
        );
        assert_eq!(config.notification_region, "eu-central-1");
        assert_eq!(config.notification_subject, "SNS Notification");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.notification_region, "eu-central-1");
        assert!(config.topic_arn.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_notification_region_follows_aws_region() {
        let config = Config::from_toml_str(
            r#"
            [aws]
            region = "us-west-2"

            [notification]
            topic_arn = "arn:aws:sns:us-west-2:123456789012:alerts"
            subject = "Model output"
        "#,
        )
        .unwrap();
        assert_eq!(config.notification_region, "us-west-2");
        assert_eq!(config.notification_subject, "Model output");
    }

    #[test]
    fn test_blank_topic_disables_publishing() {
        let config = Config::from_toml_str("[notification]\ntopic_arn = \"  \"\n").unwrap();
        assert!(config.topic_arn.is_none());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_toml_str("[notification]\nregion = \" \"\n").is_err());
        assert!(Config::from_toml_str("[aws]\nregion = \"\"\n").is_err());
        assert!(Config::from_toml_str("not = [valid").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Config::from_file("/nonexistent/bedrock-connector.toml").is_err());
    }
}
