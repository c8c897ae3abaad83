//! Bridges between modules: each consumer owns a port, the provider's service satisfies it here.

use std::sync::Arc;

use accounts::UsersService;
use async_trait::async_trait;
use bytes::Bytes;
use catalog::ImageStore;
use nutrition::{GenAiError, ProfileSource, UserProfile};
use tracing::warn;
use uploads::{UploadError, UploadService};
use uuid::Uuid;

/// Catalog images stored through the uploads service.
pub struct UploadImageStore {
    uploads: Arc<UploadService>,
}

impl UploadImageStore {
    pub fn new(uploads: Arc<UploadService>) -> Self {
        Self { uploads }
    }
}

fn image_error(e: UploadError) -> catalog::DomainError {
    match e {
        UploadError::InvalidFileType
        | UploadError::FileTooLarge
        | UploadError::InvalidPath
        | UploadError::MissingFile => catalog::DomainError::invalid_image(e.to_string()),
        UploadError::Storage { message } => catalog::DomainError::image_storage(message),
    }
}

#[async_trait]
impl ImageStore for UploadImageStore {
    async fn upload(
        &self,
        filename: &str,
        data: Bytes,
        folder: &str,
    ) -> Result<String, catalog::DomainError> {
        self.uploads
            .upload_image(filename, data, Some(folder))
            .await
            .map_err(image_error)
    }

    async fn presigned_url(&self, path: &str) -> Result<String, catalog::DomainError> {
        self.uploads.image_url(path).await.map_err(image_error)
    }

    async fn delete(&self, path: &str) -> Result<(), catalog::DomainError> {
        self.uploads.delete_image(path).await.map_err(image_error)
    }
}

/// Planner profiles read from stored users.
pub struct UserProfiles {
    users: Arc<UsersService>,
}

impl UserProfiles {
    pub fn new(users: Arc<UsersService>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl ProfileSource for UserProfiles {
    async fn profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, GenAiError> {
        match self.users.get(user_id).await {
            Ok(user) => Ok(Some(UserProfile {
                gender: user.gender,
                age: user.age,
                height_cm: user.height_cm,
                weight_kg: user.weight_kg,
                goal: user.goal,
            })),
            Err(accounts::DomainError::NotFound { .. }) => Ok(None),
            Err(e) => {
                warn!(%user_id, error = %e, "profile lookup failed");
                Err(GenAiError::profile(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use uploads::ObjectStorage;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage {
        objects: Mutex<BTreeMap<String, Bytes>>,
        broken: bool,
    }

    #[async_trait]
    impl ObjectStorage for MemoryStorage {
        async fn put_object(
            &self,
            key: &str,
            body: Bytes,
            _content_type: &str,
        ) -> Result<(), UploadError> {
            if self.broken {
                return Err(UploadError::storage("bucket missing"));
            }
            self.objects.lock().unwrap().insert(key.to_owned(), body);
            Ok(())
        }

        async fn delete_object(&self, key: &str) -> Result<(), UploadError> {
            self.objects.lock().unwrap().remove(key);
            Ok(())
        }

        async fn presign_get(&self, key: &str, _expires_in: Duration) -> Result<String, UploadError> {
            Ok(format!("https://objects.test/{key}"))
        }
    }

    fn store(storage: MemoryStorage) -> (UploadImageStore, Arc<MemoryStorage>) {
        let storage = Arc::new(storage);
        let uploads = Arc::new(UploadService::new(storage.clone()));
        (UploadImageStore::new(uploads), storage)
    }

    #[tokio::test]
    async fn image_upload_lands_in_folder() {
        let (images, storage) = store(MemoryStorage::default());

        let path = images
            .upload("apple.PNG", Bytes::from_static(b"png"), "products")
            .await
            .unwrap();

        assert!(path.starts_with("products/"), "{path}");
        assert!(path.ends_with(".png"), "{path}");
        assert!(storage.objects.lock().unwrap().contains_key(&path));
        assert_eq!(
            images.presigned_url(&path).await.unwrap(),
            format!("https://objects.test/{path}")
        );
    }

    #[tokio::test]
    async fn upload_errors_map_to_catalog_errors() {
        let (images, _) = store(MemoryStorage::default());
        let err = images
            .upload("doc.pdf", Bytes::from_static(b"%PDF"), "products")
            .await
            .unwrap_err();
        assert_eq!(err, catalog::DomainError::invalid_image("invalid file type"));

        let (images, _) = store(MemoryStorage {
            broken: true,
            ..Default::default()
        });
        let err = images
            .upload("a.jpg", Bytes::from_static(b"jpg"), "products")
            .await
            .unwrap_err();
        assert_eq!(err, catalog::DomainError::image_storage("bucket missing"));
    }
}
