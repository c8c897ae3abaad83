use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Delivery, DeliveryPatch};

#[async_trait]
pub trait DeliveriesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Delivery>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Delivery>, DomainError>;

    async fn create(&self, delivery: Delivery) -> Result<Delivery, DomainError>;

    async fn update(&self, id: Uuid, patch: DeliveryPatch) -> Result<Delivery, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
