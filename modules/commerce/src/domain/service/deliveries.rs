use std::sync::Arc;

use grocer_kit::Patch;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Delivery, DeliveryPatch, DeliveryStatus, NewDelivery};
use crate::domain::repos::DeliveriesRepository;

pub struct DeliveriesService {
    repo: Arc<dyn DeliveriesRepository>,
}

impl DeliveriesService {
    pub fn new(repo: Arc<dyn DeliveriesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Delivery>, DomainError> {
        debug!("listing deliveries");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Delivery, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Delivery", id))
    }

    #[instrument(skip(self, new_delivery), fields(order_id = %new_delivery.order_id))]
    pub async fn create(&self, new_delivery: NewDelivery) -> Result<Delivery, DomainError> {
        let now = OffsetDateTime::now_utc();
        let delivered_at = match new_delivery.status {
            DeliveryStatus::Delivered => new_delivery.delivered_at.or(Some(now)),
            _ => new_delivery.delivered_at,
        };
        let delivery = Delivery {
            id: new_delivery.id.unwrap_or_else(Uuid::now_v7),
            order_id: new_delivery.order_id,
            status: new_delivery.status,
            carrier: new_delivery.carrier,
            tracking_number: new_delivery.tracking_number,
            scheduled_for: new_delivery.scheduled_for,
            delivered_at,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(delivery).await?;
        info!(delivery_id = %created.id, status = %created.status, "delivery created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: Uuid,
        mut patch: DeliveryPatch,
    ) -> Result<Delivery, DomainError> {
        if patch.status == Patch::Set(DeliveryStatus::Delivered) && !patch.delivered_at.is_set() {
            patch.delivered_at = Patch::Set(Some(OffsetDateTime::now_utc()));
        }
        let updated = self.repo.update(id, patch).await?;
        info!(status = %updated.status, "delivery updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Delivery", id));
        }
        info!("delivery deleted");
        Ok(())
    }
}
