use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use shutterbell_core::IssuerConfig;
use shutterbell_issuer::{router, AppState};
use shutterbell_storage::{StorageError, StorageResult, UploadSigner};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_BUCKET: &str = "my-bucket";

/// One recorded `presigned_put_url` call
#[derive(Debug, Clone, PartialEq)]
pub struct SignCall {
    pub bucket: String,
    pub key: String,
    pub content_type: String,
    pub expires_in: Duration,
}

/// Signer that records its calls and returns a fake URL
#[derive(Default)]
pub struct MockSigner {
    pub calls: Mutex<Vec<SignCall>>,
    pub fail_with: Option<String>,
}

impl MockSigner {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<SignCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UploadSigner for MockSigner {
    async fn presigned_put_url(
        &self,
        bucket: &str,
        storage_key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        self.calls.lock().unwrap().push(SignCall {
            bucket: bucket.to_string(),
            key: storage_key.to_string(),
            content_type: content_type.to_string(),
            expires_in,
        });

        if let Some(message) = &self.fail_with {
            return Err(StorageError::PresignFailed(message.clone()));
        }

        Ok(format!(
            "https://{}.s3.ap-east-2.amazonaws.com/{}?X-Amz-Expires={}&X-Amz-Signature=deadbeef",
            bucket,
            storage_key,
            expires_in.as_secs()
        ))
    }
}

/// 2024-05-06 07:08:09 UTC
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()
}

pub fn issuer_config(bucket: Option<&str>) -> IssuerConfig {
    let mut vars = Vec::new();
    if let Some(bucket) = bucket {
        vars.push(("S3_BUCKET_NAME".to_string(), bucket.to_string()));
    }
    IssuerConfig::from_iter(vars).expect("issuer config")
}

/// Test server plus the signer it talks to
pub struct TestApp {
    pub server: TestServer,
    pub signer: Arc<MockSigner>,
}

pub fn setup_test_app_with(bucket: Option<&str>, signer: MockSigner) -> TestApp {
    let signer = Arc::new(signer);
    let state = AppState::new(issuer_config(bucket), signer.clone()).with_clock(fixed_clock);
    let server = TestServer::new(router(Arc::new(state))).expect("Failed to create test server");

    TestApp { server, signer }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(Some(TEST_BUCKET), MockSigner::default())
}
