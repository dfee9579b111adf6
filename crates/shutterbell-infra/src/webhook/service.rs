use reqwest::{header, Client, Url};
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;

use shutterbell_core::constants::{DEFAULT_WEBHOOK_TIMEOUT_SECS, WEBHOOK_SUCCESS_STATUS};

/// Webhook delivery errors. Non-success statuses are not errors, see `WebhookDelivery`.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Invalid webhook URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to create HTTP client for webhooks: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to serialize webhook payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to send webhook request: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Configuration for webhook service
#[derive(Clone, Debug)]
pub struct WebhookServiceConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for WebhookServiceConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_WEBHOOK_TIMEOUT_SECS,
            user_agent: format!("Shutterbell-Webhook/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Outcome of a webhook POST that reached the endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookDelivery {
    pub status_code: u16,
    pub body: String,
    pub duration_ms: f64,
}

impl WebhookDelivery {
    /// Only 204 No Content counts as delivered.
    pub fn is_delivered(&self) -> bool {
        self.status_code == WEBHOOK_SUCCESS_STATUS
    }
}

/// Posts JSON payloads to one webhook endpoint
#[derive(Clone)]
pub struct WebhookService {
    http_client: Client,
    url: Url,
}

impl WebhookService {
    pub fn new(url: &str, config: WebhookServiceConfig) -> Result<Self, WebhookError> {
        let url = Url::parse(url).map_err(|e| WebhookError::InvalidUrl(e.to_string()))?;
        if !["http", "https"].contains(&url.scheme()) {
            return Err(WebhookError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent)
            .build()
            .map_err(WebhookError::Client)?;

        Ok(Self { http_client, url })
    }

    /// Host of the endpoint, safe to log. The path carries the webhook token.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("unknown")
    }

    /// POST `payload` as JSON. Any HTTP response is returned as a `WebhookDelivery`;
    /// only failures to reach the endpoint are errors.
    #[tracing::instrument(skip(self, payload), fields(webhook.host = %self.host()))]
    pub async fn post_json<T>(&self, payload: &T) -> Result<WebhookDelivery, WebhookError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(payload)?;
        let start = Instant::now();

        let response = self
            .http_client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                // reqwest includes the full URL in its errors; strip it.
                let e = e.without_url();
                tracing::error!(
                    error = %e,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Webhook request failed"
                );
                WebhookError::Transport(e)
            })?;

        let status_code = response.status().as_u16();
        let response_body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("Failed to read response body"));
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::info!(status_code, duration_ms, "Webhook response received");

        Ok(WebhookDelivery {
            status_code,
            body: response_body,
            duration_ms,
        })
    }
}
