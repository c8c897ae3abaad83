use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::error::UploadError;
use super::ports::ObjectStorage;

/// Image extensions accepted for upload (compared lowercase, with the dot).
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// 10 MiB upload ceiling.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Presigned GET URLs stay valid for seven days.
pub const PRESIGN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub const DEFAULT_FOLDER: &str = "images";

pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Validate and store an image, returning its object path `folder/<uuid><ext>`.
    ///
    /// Validation runs before any storage call.
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn upload_image(
        &self,
        filename: &str,
        data: Bytes,
        folder: Option<&str>,
    ) -> Result<String, UploadError> {
        let ext = validate_image(filename, data.len())?;
        let folder = normalize_folder(folder)?;
        let path = format!("{folder}/{}{ext}", Uuid::new_v4());

        self.storage
            .put_object(&path, data, content_type_for(&ext))
            .await?;

        info!(%path, "image uploaded");
        Ok(path)
    }

    #[instrument(skip(self))]
    pub async fn delete_image(&self, path: &str) -> Result<(), UploadError> {
        let path = normalize_path(path)?;
        self.storage.delete_object(&path).await?;
        info!(%path, "image deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn image_url(&self, path: &str) -> Result<String, UploadError> {
        let path = normalize_path(path)?;
        let url = self.storage.presign_get(&path, PRESIGN_TTL).await?;
        debug!(%path, "presigned image url");
        Ok(url)
    }
}

/// Check extension and size; returns the lowercase extension including the dot.
pub fn validate_image(filename: &str, size: usize) -> Result<String, UploadError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .ok_or(UploadError::InvalidFileType)?;

    if !ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(UploadError::InvalidFileType);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::FileTooLarge);
    }
    Ok(ext)
}

fn normalize_folder(folder: Option<&str>) -> Result<String, UploadError> {
    let folder = folder.map(|f| f.trim_matches('/')).unwrap_or_default();
    if folder.is_empty() {
        return Ok(DEFAULT_FOLDER.to_owned());
    }
    normalize_path(folder)
}

fn normalize_path(path: &str) -> Result<String, UploadError> {
    let path = path.trim_matches('/');
    if path.is_empty() || path.split('/').any(|seg| seg.is_empty() || seg == "..") {
        return Err(UploadError::InvalidPath);
    }
    Ok(path.to_owned())
}

fn content_type_for(ext: &str) -> &'static str {
    match ext {
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
