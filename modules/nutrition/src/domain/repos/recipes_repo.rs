use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Recipe, RecipePatch};

/// Recipes with their ingredient items, written in one transaction.
#[async_trait]
pub trait RecipesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError>;

    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError>;

    async fn update(&self, id: Uuid, patch: RecipePatch) -> Result<Recipe, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
