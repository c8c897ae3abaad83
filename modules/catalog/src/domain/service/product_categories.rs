use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{NewProductCategory, ProductCategory, ProductCategoryPatch};
use crate::domain::repos::ProductCategoriesRepository;

/// Direct access to product/category links.
pub struct ProductCategoriesService {
    repo: Arc<dyn ProductCategoriesRepository>,
}

impl ProductCategoriesService {
    pub fn new(repo: Arc<dyn ProductCategoriesRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductCategory>, DomainError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<ProductCategory, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("ProductCategory", id))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, new_link: NewProductCategory) -> Result<ProductCategory, DomainError> {
        let now = OffsetDateTime::now_utc();
        let link = ProductCategory {
            id: new_link.id.unwrap_or_else(Uuid::now_v7),
            product_id: new_link.product_id,
            category_id: new_link.category_id,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.create(link).await?;
        info!(link_id = %created.id, "product category link created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: Uuid,
        patch: ProductCategoryPatch,
    ) -> Result<ProductCategory, DomainError> {
        let updated = self.repo.update(id, patch).await?;
        info!("product category link updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("ProductCategory", id));
        }
        info!("product category link deleted");
        Ok(())
    }
}
