use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Payment, PaymentPatch};

#[async_trait]
pub trait PaymentsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Payment>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Payment>, DomainError>;

    async fn create(&self, payment: Payment) -> Result<Payment, DomainError>;

    async fn update(&self, id: Uuid, patch: PaymentPatch) -> Result<Payment, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
