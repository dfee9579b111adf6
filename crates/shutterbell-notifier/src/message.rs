use shutterbell_core::constants::DISCORD_EMBED_COLOR;
use shutterbell_core::models::{
    DiscordEmbed, DiscordMessage, EmbedField, EmbedThumbnail, UploadedObject,
};
use shutterbell_core::NotifierConfig;

/// Presentation settings shared by every message
#[derive(Debug, Clone)]
pub struct MessageStyle {
    pub username: String,
    pub thumbnail_url: String,
}

impl From<&NotifierConfig> for MessageStyle {
    fn from(config: &NotifierConfig) -> Self {
        Self {
            username: config.discord_username.clone(),
            thumbnail_url: config.discord_thumbnail_url.clone(),
        }
    }
}

/// Build the webhook payload announcing one upload.
pub fn build_upload_message(object: &UploadedObject, style: &MessageStyle) -> DiscordMessage {
    let content = format!(
        "📸 New image uploaded to S3!\n\n**File name**: {}\n**Bucket**: {}\n**Upload time**: {}\n**Event type**: {}",
        object.object_key, object.bucket_name, object.event_time, object.event_name
    );

    let embed = DiscordEmbed {
        title: "Image uploaded 🎉".to_string(),
        description: format!("File `{}` was uploaded to S3", object.object_key),
        color: DISCORD_EMBED_COLOR,
        fields: vec![
            EmbedField::new("Bucket", object.bucket_name.as_str(), true),
            EmbedField::new("File name", object.object_key.as_str(), true),
            EmbedField::new("Time", object.event_time.as_str(), false),
        ],
        thumbnail: Some(EmbedThumbnail {
            url: style.thumbnail_url.clone(),
        }),
    };

    DiscordMessage {
        content,
        username: Some(style.username.clone()),
        embeds: vec![embed],
    }
}
