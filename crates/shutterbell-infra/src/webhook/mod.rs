//! Webhook delivery
//!
//! Single-attempt JSON POSTs to a fixed endpoint. Retrying is left to the caller.

pub mod service;

// Re-export commonly used types
pub use service::{WebhookDelivery, WebhookError, WebhookService, WebhookServiceConfig};
