//! Tracing initialization
//!
//! Lambda forwards stdout to CloudWatch, which stamps every line itself, so the JSON
//! format drops timestamps and ANSI colors.

use shutterbell_core::constants::DEFAULT_LOG_FILTER;
use shutterbell_core::{LogFormat, TelemetryConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_telemetry(service_name: &str, config: &TelemetryConfig) -> Result<(), anyhow::Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .without_time()
                    .with_ansi(false),
            )
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {}", e))?;

    tracing::info!(
        service = service_name,
        log_format = ?config.log_format,
        "Telemetry initialized"
    );
    Ok(())
}
