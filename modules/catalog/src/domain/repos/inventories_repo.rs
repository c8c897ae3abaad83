use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Inventory, InventoryPatch};

#[async_trait]
pub trait InventoriesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Inventory>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inventory>, DomainError>;

    async fn create(&self, inventory: Inventory) -> Result<Inventory, DomainError>;

    async fn update(&self, id: Uuid, patch: InventoryPatch) -> Result<Inventory, DomainError>;

    /// `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
