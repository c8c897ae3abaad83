use std::sync::Arc;

use grocer_kit::Patch;
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{NewOrder, Order, OrderPatch, order_total};
use crate::domain::repos::OrdersRepository;

pub struct OrdersService {
    repo: Arc<dyn OrdersRepository>,
}

impl OrdersService {
    pub fn new(repo: Arc<dyn OrdersRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Order>, DomainError> {
        debug!("listing orders");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Order, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", id))
    }

    #[instrument(skip(self, new_order), fields(user_id = %new_order.user_id, items = new_order.items.len()))]
    pub async fn create(&self, new_order: NewOrder) -> Result<Order, DomainError> {
        let now = OffsetDateTime::now_utc();
        let order = Order {
            id: new_order.id.unwrap_or_else(Uuid::now_v7),
            user_id: new_order.user_id,
            shipping_address_id: new_order.shipping_address_id,
            billing_address_id: new_order.billing_address_id,
            status: new_order.status,
            total: order_total(&new_order.items),
            items: new_order.items,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(order).await?;
        info!(order_id = %created.id, total = created.total, "order created");
        Ok(created)
    }

    /// A caller-supplied total is ignored; it always follows the items.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, mut patch: OrderPatch) -> Result<Order, DomainError> {
        patch.total = match &patch.items {
            Patch::Set(items) => Patch::Set(order_total(items)),
            Patch::Unchanged => Patch::Unchanged,
        };
        let updated = self.repo.update(id, patch).await?;
        info!(status = %updated.status, "order updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Order", id));
        }
        info!("order deleted");
        Ok(())
    }
}
