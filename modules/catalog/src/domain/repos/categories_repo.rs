use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Category, CategoryPatch};

#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Category>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError>;

    async fn create(&self, category: Category) -> Result<Category, DomainError>;

    async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category, DomainError>;

    /// `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
