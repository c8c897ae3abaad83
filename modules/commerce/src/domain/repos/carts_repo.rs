use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Cart, CartPatch};

/// Carts with their items, written in one transaction.
#[async_trait]
pub trait CartsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Cart>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cart>, DomainError>;

    async fn create(&self, cart: Cart) -> Result<Cart, DomainError>;

    async fn update(&self, id: Uuid, patch: CartPatch) -> Result<Cart, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
