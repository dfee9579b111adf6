//! Error types module
//!
//! All handler-facing failures are unified under `AppError`. Each variant knows the
//! HTTP status it maps to and how loudly it should be logged, so the binaries only
//! have to render it.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors such as validation failures
    Debug,
    /// Unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "S3_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message placed in the `error` field of the response body
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl AppError {
    /// Whether the caller is at fault (4xx) rather than the service or its upstreams.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::MissingField(_) | AppError::InvalidInput(_))
    }

    /// Short variant name used as a structured logging field
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "MissingField",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Config(_) => "Config",
            AppError::S3(_) => "S3",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Config(_) => "CONFIGURATION_ERROR",
            AppError::S3(_) => "S3_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            format!("Internal server error: {}", self)
        }
    }

    fn log_level(&self) -> LogLevel {
        if self.is_client_error() {
            LogLevel::Debug
        } else {
            LogLevel::Error
        }
    }
}
