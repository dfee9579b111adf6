use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::error::AppError;

/// Request to issue a presigned upload URL
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// Original file name, required and non-empty
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type the client will upload with
    #[serde(default)]
    pub file_type: Option<String>,
}

impl UploadUrlRequest {
    pub fn file_name(&self) -> Result<&str, AppError> {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(AppError::MissingField("fileName")),
        }
    }

    /// Requested content type, falling back to `image/jpeg` when absent or empty.
    pub fn content_type(&self) -> &str {
        self.file_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

/// Response carrying the presigned URL and where the object will land
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    /// Presigned PUT URL
    pub presigned_url: String,
    /// Generated object key. Serialized as `fileName` for existing clients.
    #[serde(rename = "fileName")]
    pub object_key: String,
    /// Validity window in seconds
    pub expires_in: u64,
}
