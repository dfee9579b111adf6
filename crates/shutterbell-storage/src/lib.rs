//! Shutterbell Storage Library
//!
//! This crate provides the upload signing abstraction and its S3 implementation.
//!
//! # Upload key format
//!
//! Every issued key has the form `uploads/{YYYYMMDD_HHMMSS}_{file_name}`, using the
//! UTC time of the request. Key generation lives in the `keys` module so every
//! caller produces the same layout.

#[cfg(feature = "storage-s3")]
pub mod factory;
pub mod keys;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "storage-s3")]
pub use factory::create_signer;
pub use keys::upload_object_key;
#[cfg(feature = "storage-s3")]
pub use s3::S3UploadSigner;
pub use traits::{StorageError, StorageResult, UploadSigner};
