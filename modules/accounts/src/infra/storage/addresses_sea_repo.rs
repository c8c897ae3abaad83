use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Address, AddressPatch};
use crate::domain::repos::AddressesRepository;

use super::entity::address::{ActiveModel as AddressAM, Column, Entity as AddressEntity};
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmAddressesRepository {
    db: DatabaseConnection,
}

impl OrmAddressesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressesRepository for OrmAddressesRepository {
    async fn list(&self) -> Result<Vec<Address>, DomainError> {
        let rows = AddressEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>, DomainError> {
        let found = AddressEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create(&self, address: Address) -> Result<Address, DomainError> {
        let m = AddressAM {
            id: Set(address.id),
            user_id: Set(address.user_id),
            line1: Set(address.line1),
            line2: Set(address.line2),
            city: Set(address.city),
            region: Set(address.region),
            postal_code: Set(address.postal_code),
            country: Set(address.country),
            created_at: Set(address.created_at),
            updated_at: Set(address.updated_at),
        };
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update(&self, id: Uuid, patch: AddressPatch) -> Result<Address, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = AddressAM {
            id: Unchanged(id),
            line1: patch.line1.into_active(),
            line2: patch.line2.into_active(),
            city: patch.city.into_active(),
            region: patch.region.into_active(),
            postal_code: patch.postal_code.into_active(),
            country: patch.country.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&self.db).await.map_err(row_err("Address", id))?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = AddressEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
