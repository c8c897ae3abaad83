use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3 as s3;
use bytes::Bytes;
use s3::config::{BehaviorVersion, Credentials, Region};
use s3::presigning::PresigningConfig;
use s3::primitives::ByteStream;
use tracing::instrument;

use crate::config::StorageConfig;
use crate::domain::error::UploadError;
use crate::domain::ports::ObjectStorage;

/// [`ObjectStorage`] backed by an S3-compatible bucket.
#[derive(Clone, Debug)]
pub struct S3ObjectStorage {
    client: s3::Client,
    bucket: String,
}

impl S3ObjectStorage {
    /// Build a client from static credentials. No network traffic happens here.
    #[must_use]
    pub fn new(cfg: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            cfg.access_key.clone(),
            cfg.secret_key.clone(),
            None,
            None,
            "grocer-static",
        );

        let mut builder = s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(cfg.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(cfg.force_path_style);
        if let Some(endpoint) = &cfg.endpoint {
            builder = builder.endpoint_url(endpoint.clone());
        }

        Self {
            client: s3::Client::from_conf(builder.build()),
            bucket: cfg.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    #[instrument(skip(self, body), fields(bucket = %self.bucket))]
    async fn put_object(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), UploadError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| UploadError::storage(e.to_string()))?;
        Ok(())
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn delete_object(&self, key: &str) -> Result<(), UploadError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| UploadError::storage(e.to_string()))?;
        Ok(())
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, UploadError> {
        let presigning =
            PresigningConfig::expires_in(expires_in).map_err(|e| UploadError::storage(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| UploadError::storage(e.to_string()))?;

        Ok(request.uri().to_owned())
    }
}
