//! Shutterbell Infrastructure Library
//!
//! This crate provides shared infrastructure components used by both functions:
//! - Telemetry initialization (tracing)
//! - Webhook delivery

pub mod telemetry;

#[cfg(feature = "webhook")]
pub mod webhook;

// Re-export commonly used types
pub use telemetry::init_telemetry;

#[cfg(feature = "webhook")]
pub use webhook::{WebhookDelivery, WebhookError, WebhookService, WebhookServiceConfig};
