use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Bundle, BundlePatch};

/// Bundles and their items, always written together in one transaction.
#[async_trait]
pub trait BundlesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Bundle>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Bundle>, DomainError>;

    async fn create(&self, bundle: Bundle) -> Result<Bundle, DomainError>;

    async fn update(&self, id: Uuid, patch: BundlePatch) -> Result<Bundle, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
