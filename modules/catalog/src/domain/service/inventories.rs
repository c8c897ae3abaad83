use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Inventory, InventoryPatch, NewInventory};
use crate::domain::repos::InventoriesRepository;

pub struct InventoriesService {
    repo: Arc<dyn InventoriesRepository>,
}

impl InventoriesService {
    pub fn new(repo: Arc<dyn InventoriesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Inventory>, DomainError> {
        debug!("listing inventories");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Inventory, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Inventory", id))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, new_inventory: NewInventory) -> Result<Inventory, DomainError> {
        let now = OffsetDateTime::now_utc();
        let inventory = Inventory {
            id: new_inventory.id.unwrap_or_else(Uuid::now_v7),
            product_id: new_inventory.product_id,
            vendor_id: new_inventory.vendor_id,
            quantity: new_inventory.quantity,
            restock_threshold: new_inventory.restock_threshold,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(inventory).await?;
        info!(inventory_id = %created.id, "inventory created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: Uuid, patch: InventoryPatch) -> Result<Inventory, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        if updated.needs_restock() {
            warn!(
                product_id = %updated.product_id,
                quantity = updated.quantity,
                threshold = updated.restock_threshold,
                "stock at or below restock threshold"
            );
        }
        info!("inventory updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Inventory", id));
        }
        info!("inventory deleted");
        Ok(())
    }
}
