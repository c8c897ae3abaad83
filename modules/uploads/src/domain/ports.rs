use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use super::error::UploadError;

/// Minimal object storage surface used by [`UploadService`](super::service::UploadService).
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str)
    -> Result<(), UploadError>;

    async fn delete_object(&self, key: &str) -> Result<(), UploadError>;

    /// Time-limited GET URL for `key`.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, UploadError>;
}
