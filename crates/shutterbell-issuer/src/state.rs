use chrono::{DateTime, Utc};
use shutterbell_core::IssuerConfig;
use shutterbell_storage::UploadSigner;
use std::sync::Arc;

/// Source of the timestamp embedded in upload keys
pub type Clock = fn() -> DateTime<Utc>;

/// Shared, read-only state built once per cold start
#[derive(Clone)]
pub struct AppState {
    pub config: IssuerConfig,
    pub signer: Arc<dyn UploadSigner>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: IssuerConfig, signer: Arc<dyn UploadSigner>) -> Self {
        Self {
            config,
            signer,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}
