use serde::{Deserialize, Serialize};

/// S3-compatible object storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Custom endpoint (MinIO, localstack). `None` uses the AWS default for `region`.
    pub endpoint: Option<String>,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub region: String,
    /// Path-style addressing (`endpoint/bucket/key`), required by most self-hosted stores.
    pub force_path_style: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: Some("http://localhost:9000".to_owned()),
            bucket: "grocer".to_owned(),
            access_key: "minioadmin".to_owned(),
            secret_key: "minioadmin".to_owned(),
            region: "us-east-1".to_owned(),
            force_path_style: true,
        }
    }
}
