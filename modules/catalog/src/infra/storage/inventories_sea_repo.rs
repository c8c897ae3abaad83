use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Inventory, InventoryPatch};
use crate::domain::repos::InventoriesRepository;

use super::entity::inventory::{ActiveModel as InventoryAM, Column, Entity as InventoryEntity};
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmInventoriesRepository {
    db: DatabaseConnection,
}

impl OrmInventoriesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InventoriesRepository for OrmInventoriesRepository {
    async fn list(&self) -> Result<Vec<Inventory>, DomainError> {
        let rows = InventoryEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inventory>, DomainError> {
        let found = InventoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create(&self, inventory: Inventory) -> Result<Inventory, DomainError> {
        let m = InventoryAM {
            id: Set(inventory.id),
            product_id: Set(inventory.product_id),
            vendor_id: Set(inventory.vendor_id),
            quantity: Set(inventory.quantity),
            restock_threshold: Set(inventory.restock_threshold),
            created_at: Set(inventory.created_at),
            updated_at: Set(inventory.updated_at),
        };
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update(&self, id: Uuid, patch: InventoryPatch) -> Result<Inventory, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = InventoryAM {
            id: Unchanged(id),
            product_id: patch.product_id.into_active(),
            vendor_id: patch.vendor_id.into_active(),
            quantity: patch.quantity.into_active(),
            restock_threshold: patch.restock_threshold.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&self.db).await.map_err(row_err("Inventory", id))?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = InventoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
