pub mod upload_url;

pub use upload_url::{issue_upload_url, preflight};
