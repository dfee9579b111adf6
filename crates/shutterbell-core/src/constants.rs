/// Folder every issued upload key is placed under.
pub const UPLOAD_PREFIX: &str = "uploads";

/// `chrono` format of the timestamp embedded in upload keys (whole seconds).
pub const UPLOAD_KEY_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Validity window of an issued upload URL.
pub const UPLOAD_URL_EXPIRES_IN_SECS: u64 = 3600;

/// Content type used when the request does not name one.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

pub const DEFAULT_S3_REGION: &str = "ap-east-2";
pub const DEFAULT_S3_ENDPOINT: &str = "https://s3.ap-east-2.amazonaws.com";

/// `eventSource` carried by records emitted by S3 bucket notifications.
pub const S3_EVENT_SOURCE: &str = "aws:s3";

/// Discord blurple.
pub const DISCORD_EMBED_COLOR: u32 = 5_814_783;
pub const DEFAULT_DISCORD_USERNAME: &str = "S3 Upload Notifier";
pub const DEFAULT_DISCORD_THUMBNAIL_URL: &str =
    "https://cdn-icons-png.flaticon.com/512/4712/4712035.png";

/// Discord answers a successful execute-webhook call with 204 No Content.
pub const WEBHOOK_SUCCESS_STATUS: u16 = 204;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_LOG_FILTER: &str = "warn,shutterbell=info";
