use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Vendor, VendorPatch};
use crate::domain::repos::VendorsRepository;

use super::entity::vendor::{ActiveModel as VendorAM, Column, Entity as VendorEntity};
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmVendorsRepository {
    db: DatabaseConnection,
}

impl OrmVendorsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VendorsRepository for OrmVendorsRepository {
    async fn list(&self) -> Result<Vec<Vendor>, DomainError> {
        let rows = VendorEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>, DomainError> {
        let found = VendorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create(&self, vendor: Vendor) -> Result<Vendor, DomainError> {
        let m = VendorAM {
            id: Set(vendor.id),
            name: Set(vendor.name),
            email: Set(vendor.email),
            phone: Set(vendor.phone),
            is_active: Set(vendor.is_active),
            deleted_at: Set(vendor.deleted_at),
            created_at: Set(vendor.created_at),
            updated_at: Set(vendor.updated_at),
        };
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update(&self, id: Uuid, patch: VendorPatch) -> Result<Vendor, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = VendorAM {
            id: Unchanged(id),
            name: patch.name.into_active(),
            email: patch.email.into_active(),
            phone: patch.phone.into_active(),
            is_active: patch.is_active.into_active(),
            deleted_at: patch.deleted_at.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&self.db).await.map_err(row_err("Vendor", id))?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = VendorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
