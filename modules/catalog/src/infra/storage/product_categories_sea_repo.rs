use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{ProductCategory, ProductCategoryPatch};
use crate::domain::repos::ProductCategoriesRepository;

use super::entity::product_category::{ActiveModel as LinkAM, Column, Entity as LinkEntity};
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmProductCategoriesRepository {
    db: DatabaseConnection,
}

impl OrmProductCategoriesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCategoriesRepository for OrmProductCategoriesRepository {
    async fn list(&self) -> Result<Vec<ProductCategory>, DomainError> {
        let rows = LinkEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductCategory>, DomainError> {
        let found = LinkEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create(&self, link: ProductCategory) -> Result<ProductCategory, DomainError> {
        let m = LinkAM {
            id: Set(link.id),
            product_id: Set(link.product_id),
            category_id: Set(link.category_id),
            created_at: Set(link.created_at),
            updated_at: Set(link.updated_at),
        };
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: ProductCategoryPatch,
    ) -> Result<ProductCategory, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = LinkAM {
            id: Unchanged(id),
            product_id: patch.product_id.into_active(),
            category_id: patch.category_id.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m
            .update(&self.db)
            .await
            .map_err(row_err("ProductCategory", id))?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = LinkEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
