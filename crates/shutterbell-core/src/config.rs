//! Configuration module
//!
//! Each function reads its configuration once at cold start (environment variables,
//! plus an optional `.env` file for local runs) and hands the typed struct to its
//! handler. Nothing here is consulted again per invocation.

use anyhow::Context;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_DISCORD_THUMBNAIL_URL, DEFAULT_DISCORD_USERNAME, DEFAULT_S3_ENDPOINT,
    DEFAULT_S3_REGION, DEFAULT_WEBHOOK_TIMEOUT_SECS,
};
use crate::error::AppError;

fn default_s3_region() -> String {
    DEFAULT_S3_REGION.to_string()
}

fn default_s3_endpoint() -> String {
    DEFAULT_S3_ENDPOINT.to_string()
}

fn default_discord_username() -> String {
    DEFAULT_DISCORD_USERNAME.to_string()
}

fn default_discord_thumbnail_url() -> String {
    DEFAULT_DISCORD_THUMBNAIL_URL.to_string()
}

fn default_webhook_timeout_secs() -> u64 {
    DEFAULT_WEBHOOK_TIMEOUT_SECS
}

/// Upload URL issuer configuration
#[derive(Clone, Debug, Deserialize)]
pub struct IssuerConfig {
    /// Target bucket. Kept optional so a missing value surfaces as a 500 on each
    /// request instead of a failed cold start.
    #[serde(default)]
    pub s3_bucket_name: Option<String>,
    #[serde(default = "default_s3_region")]
    pub s3_region: String,
    #[serde(default = "default_s3_endpoint")]
    pub s3_endpoint: String,
}

impl IssuerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    pub fn from_iter<I>(vars: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).context("Failed to load issuer configuration")
    }

    /// The configured bucket, or a configuration error when it is unset or blank.
    pub fn bucket(&self) -> Result<&str, AppError> {
        self.s3_bucket_name
            .as_deref()
            .map(str::trim)
            .filter(|bucket| !bucket.is_empty())
            .ok_or_else(|| AppError::Config("S3_BUCKET_NAME is not configured".to_string()))
    }
}

/// Upload notification forwarder configuration
#[derive(Clone, Deserialize)]
pub struct NotifierConfig {
    /// Discord execute-webhook URL. Contains a secret token, so `Debug` redacts it.
    pub discord_webhook_url: String,
    #[serde(default = "default_discord_username")]
    pub discord_username: String,
    #[serde(default = "default_discord_thumbnail_url")]
    pub discord_thumbnail_url: String,
    #[serde(default = "default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,
}

impl std::fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierConfig")
            .field("discord_webhook_url", &"<redacted>")
            .field("discord_username", &self.discord_username)
            .field("discord_thumbnail_url", &self.discord_thumbnail_url)
            .field("webhook_timeout_secs", &self.webhook_timeout_secs)
            .finish()
    }
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_iter(std::env::vars())
    }

    pub fn from_iter<I>(vars: I) -> Result<Self, anyhow::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self =
            envy::from_iter(vars).context("Failed to load notifier configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        let parsed = url::Url::parse(&self.discord_webhook_url)
            .map_err(|e| anyhow::anyhow!("DISCORD_WEBHOOK_URL is not a valid URL: {}", e))?;

        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(anyhow::anyhow!(
                "DISCORD_WEBHOOK_URL must use http or https, got '{}'",
                parsed.scheme()
            ));
        }

        if self.webhook_timeout_secs == 0 {
            return Err(anyhow::anyhow!("WEBHOOK_TIMEOUT_SECS must be greater than 0"));
        }

        Ok(())
    }
}

/// Log output format
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for CloudWatch
    #[default]
    Json,
    /// Human-readable output for local runs
    Pretty,
}

/// Logging configuration shared by both functions. The filter itself comes from
/// `RUST_LOG`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        envy::from_env().context("Failed to load telemetry configuration")
    }
}
