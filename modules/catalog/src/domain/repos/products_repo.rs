use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Product, ProductPatch};

/// Products together with their category links.
///
/// `create` and `update` write the product row and its links in one transaction.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
