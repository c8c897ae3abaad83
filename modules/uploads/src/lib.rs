//! Uploads Module
//!
//! Validates product images and stores them in S3-compatible object storage.
//! Callers keep the returned object path and resolve it to a presigned URL on read.

pub mod config;
pub mod module;

pub use config::StorageConfig;
pub use domain::error::UploadError;
pub use domain::ports::ObjectStorage;
pub use domain::service::UploadService;
pub use module::UploadsModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
