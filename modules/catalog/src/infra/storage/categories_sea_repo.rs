use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Category, CategoryPatch};
use crate::domain::repos::CategoriesRepository;

use super::entity::category::{ActiveModel as CategoryAM, Column, Entity as CategoryEntity};
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmCategoriesRepository {
    db: DatabaseConnection,
}

impl OrmCategoriesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoriesRepository for OrmCategoriesRepository {
    async fn list(&self) -> Result<Vec<Category>, DomainError> {
        let rows = CategoryEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, DomainError> {
        let found = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn create(&self, category: Category) -> Result<Category, DomainError> {
        let m = CategoryAM {
            id: Set(category.id),
            name: Set(category.name),
            description: Set(category.description),
            created_at: Set(category.created_at),
            updated_at: Set(category.updated_at),
        };
        let inserted = m.insert(&self.db).await.map_err(db_err)?;
        Ok(inserted.into())
    }

    async fn update(&self, id: Uuid, patch: CategoryPatch) -> Result<Category, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let m = CategoryAM {
            id: Unchanged(id),
            name: patch.name.into_active(),
            description: patch.description.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&self.db).await.map_err(row_err("Category", id))?;
        Ok(updated.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
