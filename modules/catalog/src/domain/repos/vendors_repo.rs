use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Vendor, VendorPatch};

#[async_trait]
pub trait VendorsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Vendor>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>, DomainError>;

    async fn create(&self, vendor: Vendor) -> Result<Vendor, DomainError>;

    async fn update(&self, id: Uuid, patch: VendorPatch) -> Result<Vendor, DomainError>;

    /// `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
