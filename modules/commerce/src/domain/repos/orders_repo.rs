use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Order, OrderPatch};

/// Orders with their line items, written in one transaction.
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Order>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError>;

    async fn create(&self, order: Order) -> Result<Order, DomainError>;

    async fn update(&self, id: Uuid, patch: OrderPatch) -> Result<Order, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
