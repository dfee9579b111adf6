//! Upload key generation.
//!
//! Key format: `uploads/{YYYYMMDD_HHMMSS}_{file_name}`.

use chrono::{DateTime, Utc};
use shutterbell_core::constants::{UPLOAD_KEY_TIMESTAMP_FORMAT, UPLOAD_PREFIX};

/// Generate the object key for a file uploaded at `now`.
///
/// The timestamp has whole-second precision, so two uploads of the same name in the
/// same second share a key and the later one wins.
pub fn upload_object_key(file_name: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}/{}_{}",
        UPLOAD_PREFIX,
        now.format(UPLOAD_KEY_TIMESTAMP_FORMAT),
        file_name
    )
}
