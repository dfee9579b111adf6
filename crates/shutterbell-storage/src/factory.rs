use crate::{S3UploadSigner, StorageResult, UploadSigner};
use shutterbell_core::IssuerConfig;
use std::sync::Arc;

/// Create the upload signer described by the issuer configuration
pub async fn create_signer(config: &IssuerConfig) -> StorageResult<Arc<dyn UploadSigner>> {
    let signer = S3UploadSigner::new(config.s3_region.clone(), config.s3_endpoint.clone()).await?;
    Ok(Arc::new(signer))
}
