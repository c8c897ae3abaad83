use serde::{Deserialize, Serialize};

/// Stored object path plus a presigned URL for immediate display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDto {
    pub path: String,
    pub url: String,
}
