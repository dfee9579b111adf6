//! Upload signing abstraction
//!
//! This module defines the trait every signing backend implements.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Presign failed: {0}")]
    PresignFailed(String),

    #[error("Invalid expiry: {0}")]
    InvalidExpiry(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Issues time-limited upload credentials.
///
/// Implementations only compute a credential; nothing is written to the bucket until
/// the client performs the upload itself.
#[async_trait]
pub trait UploadSigner: Send + Sync {
    /// Generate a presigned PUT URL for `storage_key` in `bucket`.
    ///
    /// The URL is bound to `content_type`: the upload must send the same
    /// `Content-Type` header or the provider rejects it.
    async fn presigned_put_url(
        &self,
        bucket: &str,
        storage_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;
}
