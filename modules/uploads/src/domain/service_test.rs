use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use super::error::UploadError;
use super::ports::ObjectStorage;
use super::service::{MAX_IMAGE_BYTES, PRESIGN_TTL, UploadService, validate_image};

#[derive(Default)]
struct RecordingStorage {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingStorage {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), UploadError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(UploadError::storage("bucket unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn put_object(
        &self,
        key: &str,
        _body: Bytes,
        content_type: &str,
    ) -> Result<(), UploadError> {
        self.record(format!("put {key} {content_type}"))
    }

    async fn delete_object(&self, key: &str) -> Result<(), UploadError> {
        self.record(format!("delete {key}"))
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, UploadError> {
        self.record(format!("presign {key} {}", expires_in.as_secs()))?;
        Ok(format!("https://storage.local/{key}?sig=abc"))
    }
}

fn service(storage: &Arc<RecordingStorage>) -> UploadService {
    UploadService::new(storage.clone())
}

#[tokio::test]
async fn pdf_is_rejected_without_touching_storage() {
    let storage = Arc::new(RecordingStorage::default());

    let err = service(&storage)
        .upload_image("doc.pdf", Bytes::from_static(b"%PDF"), None)
        .await
        .unwrap_err();

    assert_eq!(err, UploadError::InvalidFileType);
    assert_eq!(err.to_string(), "invalid file type");
    assert!(storage.calls().is_empty());
}

#[tokio::test]
async fn oversized_file_is_rejected_without_touching_storage() {
    let storage = Arc::new(RecordingStorage::default());
    let data = Bytes::from(vec![0u8; 11 * 1024 * 1024]);

    let err = service(&storage)
        .upload_image("photo.png", data, None)
        .await
        .unwrap_err();

    assert_eq!(err, UploadError::FileTooLarge);
    assert_eq!(err.to_string(), "file size exceeds 10MB");
    assert!(storage.calls().is_empty());
}

#[test]
fn validate_image_accepts_allowed_extensions_case_insensitively() {
    assert_eq!(validate_image("a.JPG", 10).unwrap(), ".jpg");
    assert_eq!(validate_image("b.webp", 10).unwrap(), ".webp");
    assert_eq!(validate_image("c.jpeg", MAX_IMAGE_BYTES).unwrap(), ".jpeg");
    assert_eq!(
        validate_image("no_extension", 10),
        Err(UploadError::InvalidFileType)
    );
}

#[tokio::test]
async fn upload_namespaces_path_under_folder() {
    let storage = Arc::new(RecordingStorage::default());

    let path = service(&storage)
        .upload_image("apple.png", Bytes::from_static(b"png"), Some("products"))
        .await
        .unwrap();

    assert!(path.starts_with("products/"), "{path}");
    assert!(path.ends_with(".png"), "{path}");
    let id = path
        .trim_start_matches("products/")
        .trim_end_matches(".png");
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(storage.calls(), vec![format!("put {path} image/png")]);
}

#[tokio::test]
async fn upload_defaults_folder_to_images() {
    let storage = Arc::new(RecordingStorage::default());

    let path = service(&storage)
        .upload_image("pear.gif", Bytes::from_static(b"gif"), Some("/"))
        .await
        .unwrap();

    assert!(path.starts_with("images/"), "{path}");
}

#[tokio::test]
async fn upload_rejects_parent_segments_in_folder() {
    let storage = Arc::new(RecordingStorage::default());

    let err = service(&storage)
        .upload_image("pear.gif", Bytes::from_static(b"gif"), Some("../etc"))
        .await
        .unwrap_err();

    assert_eq!(err, UploadError::InvalidPath);
    assert!(storage.calls().is_empty());
}

#[tokio::test]
async fn image_url_presigns_for_seven_days() {
    let storage = Arc::new(RecordingStorage::default());

    let url = service(&storage)
        .image_url("products/a.png")
        .await
        .unwrap();

    assert_eq!(url, "https://storage.local/products/a.png?sig=abc");
    assert_eq!(
        storage.calls(),
        vec![format!("presign products/a.png {}", PRESIGN_TTL.as_secs())]
    );
    assert_eq!(PRESIGN_TTL.as_secs(), 604_800);
}

#[tokio::test]
async fn storage_failures_propagate() {
    let storage = Arc::new(RecordingStorage {
        fail: true,
        ..Default::default()
    });

    let err = service(&storage)
        .delete_image("products/a.png")
        .await
        .unwrap_err();

    assert!(matches!(err, UploadError::Storage { .. }));
}
