//! Shutterbell Core Library
//!
//! This crate provides the domain models, error types, configuration and constants
//! shared by the upload URL issuer and the upload notification forwarder.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{IssuerConfig, LogFormat, NotifierConfig, TelemetryConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
