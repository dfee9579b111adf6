//! Invocation result returned to the Lambda platform.

use serde::{Deserialize, Serialize};

pub const DELIVERED_BODY: &str = "Notification sent to Discord successfully!";
pub const REJECTED_BODY: &str = "Failed to send notification to Discord";
pub const EMPTY_BATCH_BODY: &str = "No S3 records to process";

/// Per-batch record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardSummary {
    pub received: usize,
    pub skipped: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// `{statusCode, body, summary}` where `body` holds a JSON-encoded string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardResponse {
    pub status_code: u16,
    pub body: String,
    pub summary: ForwardSummary,
}

impl ForwardResponse {
    pub fn new(status_code: u16, message: &str, summary: ForwardSummary) -> Self {
        Self {
            status_code,
            body: serde_json::Value::String(message.to_string()).to_string(),
            summary,
        }
    }

    /// The decoded `body` text
    pub fn message(&self) -> Option<String> {
        serde_json::from_str(&self.body).ok()
    }
}
