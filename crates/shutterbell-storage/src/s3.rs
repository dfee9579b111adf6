use crate::traits::{StorageError, StorageResult, UploadSigner};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use std::time::Duration;

/// S3 upload signer backed by the AWS SDK
///
/// Credentials come from the default provider chain (on Lambda, the execution role).
#[derive(Clone)]
pub struct S3UploadSigner {
    client: Client,
}

impl S3UploadSigner {
    /// Create a new S3UploadSigner
    ///
    /// # Arguments
    /// * `region` - AWS region the bucket lives in
    /// * `endpoint_url` - Regional endpoint the presigned URLs point at
    ///   (e.g., "https://s3.ap-east-2.amazonaws.com", or "http://localhost:9000" for MinIO)
    pub async fn new(region: String, endpoint_url: String) -> StorageResult<Self> {
        if !(endpoint_url.starts_with("https://") || endpoint_url.starts_with("http://")) {
            return Err(StorageError::ConfigError(format!(
                "S3 endpoint must be an http(s) URL, got '{}'",
                endpoint_url
            )));
        }

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .endpoint_url(endpoint_url.as_str())
            .load()
            .await;

        let client = Client::new(&shared_config);

        tracing::debug!(
            region = %region,
            endpoint = %endpoint_url,
            "S3 upload signer initialized"
        );

        Ok(Self::from_client(client))
    }

    /// Wrap an already configured client
    pub fn from_client(client: Client) -> Self {
        S3UploadSigner { client }
    }
}

#[async_trait]
impl UploadSigner for S3UploadSigner {
    #[tracing::instrument(skip(self), fields(
        aws.service.name = "s3",
        aws.s3.operation = "PutObject",
        s3.bucket = %bucket,
        s3.key = %storage_key
    ))]
    async fn presigned_put_url(
        &self,
        bucket: &str,
        storage_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StorageError::InvalidExpiry(e.to_string()))?;

        let start = std::time::Instant::now();

        let presigned = self
            .client
            .put_object()
            .bucket(bucket)
            .key(storage_key)
            .content_type(content_type)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(
                    error = %message,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 presign failed"
                );
                StorageError::PresignFailed(message)
            })?;

        tracing::info!(
            expires_in_seconds = expires_in.as_secs(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Generated presigned PUT URL"
        );

        Ok(presigned.uri().to_string())
    }
}
