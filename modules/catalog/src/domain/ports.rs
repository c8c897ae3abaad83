use async_trait::async_trait;
use bytes::Bytes;

use super::error::DomainError;

/// Where product images live. Products store the returned object path, never a URL.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Validate and store an image under `folder`, returning its object path.
    async fn upload(&self, filename: &str, data: Bytes, folder: &str)
    -> Result<String, DomainError>;

    async fn presigned_url(&self, path: &str) -> Result<String, DomainError>;

    async fn delete(&self, path: &str) -> Result<(), DomainError>;
}
