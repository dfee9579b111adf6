use crate::message::{build_upload_message, MessageStyle};
use crate::result::{
    ForwardResponse, ForwardSummary, DELIVERED_BODY, EMPTY_BATCH_BODY, REJECTED_BODY,
};
use shutterbell_core::models::S3Event;
use shutterbell_core::NotifierConfig;
use shutterbell_infra::{WebhookError, WebhookService, WebhookServiceConfig};

/// First failure seen in a batch; it decides the invocation status.
enum Failure {
    Rejected(u16),
    Transport(String),
}

/// Forwards upload events to the Discord webhook.
///
/// Built once per cold start; the HTTP client inside is reused across invocations.
#[derive(Clone)]
pub struct NotificationForwarder {
    webhook: WebhookService,
    style: MessageStyle,
}

impl NotificationForwarder {
    pub fn new(config: &NotifierConfig) -> Result<Self, WebhookError> {
        let webhook = WebhookService::new(
            &config.discord_webhook_url,
            WebhookServiceConfig {
                timeout_seconds: config.webhook_timeout_secs,
                ..WebhookServiceConfig::default()
            },
        )?;

        Ok(Self {
            webhook,
            style: MessageStyle::from(config),
        })
    }

    /// Post one message per eligible record, in order. A failed record does not stop
    /// the batch.
    #[tracing::instrument(skip(self, event), fields(records = event.records.len()))]
    pub async fn forward(&self, event: &S3Event) -> ForwardResponse {
        let mut summary = ForwardSummary {
            received: event.records.len(),
            ..ForwardSummary::default()
        };
        let mut first_failure: Option<Failure> = None;

        for (index, record) in event.records.iter().enumerate() {
            if !record.is_from_s3() {
                tracing::info!(
                    index,
                    event_source = record.event_source.as_deref().unwrap_or("none"),
                    "Skipping non-S3 record"
                );
                summary.skipped += 1;
                continue;
            }

            let Some(object) = record.uploaded_object() else {
                tracing::warn!(index, "Skipping S3 record without bucket name or object key");
                summary.skipped += 1;
                continue;
            };

            let message = build_upload_message(&object, &self.style);

            match self.webhook.post_json(&message).await {
                Ok(delivery) if delivery.is_delivered() => {
                    tracing::info!(
                        bucket = %object.bucket_name,
                        key = %object.object_key,
                        "Upload notification delivered"
                    );
                    summary.delivered += 1;
                }
                Ok(delivery) => {
                    tracing::warn!(
                        bucket = %object.bucket_name,
                        key = %object.object_key,
                        status_code = delivery.status_code,
                        response_body = %delivery.body,
                        "Webhook rejected upload notification"
                    );
                    summary.failed += 1;
                    first_failure.get_or_insert(Failure::Rejected(delivery.status_code));
                }
                Err(e) => {
                    tracing::error!(
                        bucket = %object.bucket_name,
                        key = %object.object_key,
                        error = %e,
                        "Failed to send upload notification"
                    );
                    summary.failed += 1;
                    first_failure.get_or_insert(Failure::Transport(e.to_string()));
                }
            }
        }

        let response = match first_failure {
            Some(Failure::Rejected(status)) => ForwardResponse::new(status, REJECTED_BODY, summary),
            Some(Failure::Transport(message)) => {
                ForwardResponse::new(500, &format!("Error: {}", message), summary)
            }
            None if summary.delivered == 0 => ForwardResponse::new(200, EMPTY_BATCH_BODY, summary),
            None => ForwardResponse::new(200, DELIVERED_BODY, summary),
        };

        tracing::info!(
            status_code = response.status_code,
            received = summary.received,
            skipped = summary.skipped,
            delivered = summary.delivered,
            failed = summary.failed,
            "Batch processed"
        );

        response
    }
}
