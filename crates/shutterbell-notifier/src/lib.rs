//! Shutterbell upload notifier
//!
//! Turns S3 "object created" event batches into Discord webhook messages, one POST
//! per uploaded object.

pub mod forwarder;
pub mod message;
pub mod result;

pub use forwarder::NotificationForwarder;
pub use message::{build_upload_message, MessageStyle};
pub use result::{ForwardResponse, ForwardSummary};
