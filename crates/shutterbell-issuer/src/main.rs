use shutterbell_core::{IssuerConfig, TelemetryConfig};
use shutterbell_infra::init_telemetry;
use shutterbell_issuer::{router, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let telemetry = TelemetryConfig::from_env()?;
    init_telemetry(env!("CARGO_PKG_NAME"), &telemetry)?;

    let config = IssuerConfig::from_env()?;
    if config.bucket().is_err() {
        tracing::warn!("S3_BUCKET_NAME is not set; every request will fail until it is configured");
    }

    let signer = shutterbell_storage::create_signer(&config).await?;
    let state = Arc::new(AppState::new(config, signer));

    lambda_http::run(router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Lambda runtime error: {}", e))
}
