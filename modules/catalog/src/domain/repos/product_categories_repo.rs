use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{ProductCategory, ProductCategoryPatch};

#[async_trait]
pub trait ProductCategoriesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ProductCategory>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductCategory>, DomainError>;

    async fn create(&self, link: ProductCategory) -> Result<ProductCategory, DomainError>;

    async fn update(&self, id: Uuid, patch: ProductCategoryPatch) -> Result<ProductCategory, DomainError>;

    /// `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
