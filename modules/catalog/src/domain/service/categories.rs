use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Category, CategoryPatch, NewCategory};
use crate::domain::repos::CategoriesRepository;

pub struct CategoriesService {
    repo: Arc<dyn CategoriesRepository>,
}

impl CategoriesService {
    pub fn new(repo: Arc<dyn CategoriesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Category>, DomainError> {
        debug!("listing categories");
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Category, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    #[instrument(skip(self, new_category), fields(name = %new_category.name))]
    pub async fn create(&self, new_category: NewCategory) -> Result<Category, DomainError> {
        let now = OffsetDateTime::now_utc();
        let category = Category {
            id: new_category.id.unwrap_or_else(Uuid::now_v7),
            name: new_category.name,
            description: new_category.description,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(category).await?;
        info!(category_id = %created.id, "category created");
        Ok(created)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("category updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Category", id));
        }
        info!("category deleted");
        Ok(())
    }
}
