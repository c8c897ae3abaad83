use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Delivery, DeliveryPatch};
use crate::domain::repos::DeliveriesRepository;

use super::entity::delivery::{ActiveModel as DeliveryAM, Column, Entity as DeliveryEntity};
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmDeliveriesRepository {
    db: DatabaseConnection,
}

impl OrmDeliveriesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeliveriesRepository for OrmDeliveriesRepository {
    async fn list(&self) -> Result<Vec<Delivery>, DomainError> {
        DeliveryEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(Delivery::try_from)
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Delivery>, DomainError> {
        DeliveryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(Delivery::try_from)
            .transpose()
    }

    async fn create(&self, delivery: Delivery) -> Result<Delivery, DomainError> {
        let m = DeliveryAM {
            id: Set(delivery.id),
            order_id: Set(delivery.order_id),
            status: Set(delivery.status.as_str().to_owned()),
            carrier: Set(delivery.carrier),
            tracking_number: Set(delivery.tracking_number),
            scheduled_for: Set(delivery.scheduled_for),
            delivered_at: Set(delivery.delivered_at),
            created_at: Set(delivery.created_at),
            updated_at: Set(delivery.updated_at),
        };
        m.insert(&self.db).await.map_err(db_err)?.try_into()
    }

    async fn update(&self, id: Uuid, patch: DeliveryPatch) -> Result<Delivery, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = DeliveryAM {
            id: Unchanged(id),
            order_id: patch.order_id.into_active(),
            status: patch.status.map(|s| s.as_str().to_owned()).into_active(),
            carrier: patch.carrier.into_active(),
            tracking_number: patch.tracking_number.into_active(),
            scheduled_for: patch.scheduled_for.into_active(),
            delivered_at: patch.delivered_at.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        m.update(&self.db)
            .await
            .map_err(row_err("Delivery", id))?
            .try_into()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = DeliveryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
