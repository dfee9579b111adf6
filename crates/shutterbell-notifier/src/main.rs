use lambda_runtime::{service_fn, Error, LambdaEvent};
use shutterbell_core::models::S3Event;
use shutterbell_core::{NotifierConfig, TelemetryConfig};
use shutterbell_infra::init_telemetry;
use shutterbell_notifier::{ForwardResponse, NotificationForwarder};

async fn handle_event(
    forwarder: &NotificationForwarder,
    event: LambdaEvent<S3Event>,
) -> Result<ForwardResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        records = event.payload.records.len(),
        "Received S3 event"
    );
    tracing::debug!(event = ?event.payload, "S3 event payload");

    Ok(forwarder.forward(&event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let telemetry = TelemetryConfig::from_env()?;
    init_telemetry(env!("CARGO_PKG_NAME"), &telemetry)?;

    let config = NotifierConfig::from_env()?;
    let forwarder = NotificationForwarder::new(&config)?;
    let forwarder = &forwarder;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| async move {
        handle_event(forwarder, event).await
    }))
    .await
}
