pub mod notification;
pub mod storage_event;
pub mod upload;

pub use notification::{DiscordEmbed, DiscordMessage, EmbedField, EmbedThumbnail};
pub use storage_event::{S3Bucket, S3Entity, S3Event, S3EventRecord, S3Object, UploadedObject};
pub use upload::{UploadUrlRequest, UploadUrlResponse};
