//! S3 bucket notification payload.
//!
//! Only the fields the forwarder reads are modelled. Everything is optional so a
//! single malformed record is skipped instead of failing the whole batch.

use serde::Deserialize;

use crate::constants::S3_EVENT_SOURCE;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3EventRecord {
    #[serde(default)]
    pub event_source: Option<String>,
    /// ISO-8601 timestamp, kept verbatim
    #[serde(default)]
    pub event_time: Option<String>,
    /// e.g. `ObjectCreated:Put`
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: S3Bucket,
    #[serde(default)]
    pub object: S3Object,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Bucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct S3Object {
    /// URL-encoded object key
    #[serde(default)]
    pub key: Option<String>,
}

/// The upload a record describes, with the object key already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    pub bucket_name: String,
    pub object_key: String,
    pub event_time: String,
    pub event_name: String,
}

impl S3EventRecord {
    pub fn is_from_s3(&self) -> bool {
        self.event_source.as_deref() == Some(S3_EVENT_SOURCE)
    }

    /// Extract the uploaded object, or `None` when bucket name or key is missing.
    pub fn uploaded_object(&self) -> Option<UploadedObject> {
        let entity = self.s3.as_ref()?;
        let bucket_name = entity.bucket.name.clone().filter(|n| !n.is_empty())?;
        let raw_key = entity.object.key.as_deref().filter(|k| !k.is_empty())?;

        Some(UploadedObject {
            bucket_name,
            object_key: decode_object_key(raw_key),
            event_time: self
                .event_time
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            event_name: self
                .event_name
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

/// S3 encodes keys in notifications like a form value: `+` for space, `%XX` escapes.
/// Keys that do not decode to UTF-8 are returned as received.
pub fn decode_object_key(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
