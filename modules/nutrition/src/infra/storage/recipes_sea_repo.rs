use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, Unchanged,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{Recipe, RecipeItem, RecipePatch};
use crate::domain::repos::RecipesRepository;

use super::entity::recipe::{ActiveModel as RecipeAM, Column, Entity as RecipeEntity};
use super::entity::recipe_item::{self as item, ActiveModel as ItemAM, Entity as ItemEntity};
use super::mapper::recipe_from;
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmRecipesRepository {
    db: DatabaseConnection,
}

impl OrmRecipesRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn items_of<C: ConnectionTrait>(
    conn: &C,
    recipe_id: Uuid,
) -> Result<Vec<item::Model>, DomainError> {
    ItemEntity::find()
        .filter(item::Column::RecipeId.eq(recipe_id))
        .all(conn)
        .await
        .map_err(db_err)
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    recipe_id: Uuid,
    items: Vec<RecipeItem>,
) -> Result<Vec<item::Model>, DomainError> {
    let rows: Vec<item::Model> = (0_i32..)
        .zip(items)
        .map(|(position, it)| item::Model {
            id: Uuid::now_v7(),
            recipe_id,
            product_id: it.product_id,
            amount: it.amount,
            unit: it.unit,
            position,
        })
        .collect();
    if !rows.is_empty() {
        ItemEntity::insert_many(rows.iter().cloned().map(ItemAM::from))
            .exec_without_returning(conn)
            .await
            .map_err(db_err)?;
    }
    Ok(rows)
}

#[async_trait]
impl RecipesRepository for OrmRecipesRepository {
    async fn list(&self) -> Result<Vec<Recipe>, DomainError> {
        let rows = RecipeEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = rows
            .load_many(ItemEntity, &self.db)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .zip(items)
            .map(|(recipe, items)| recipe_from(recipe, items))
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Recipe>, DomainError> {
        let Some(found) = RecipeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let items = items_of(&self.db, id).await?;
        Ok(Some(recipe_from(found, items)))
    }

    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let m = RecipeAM {
            id: Set(recipe.id),
            name: Set(recipe.name),
            instructions: Set(recipe.instructions),
            calories: Set(recipe.calories),
            created_at: Set(recipe.created_at),
            updated_at: Set(recipe.updated_at),
        };
        let inserted = m.insert(&txn).await.map_err(db_err)?;
        let items = insert_items(&txn, recipe.id, recipe.items).await?;

        txn.commit().await.map_err(db_err)?;
        Ok(recipe_from(inserted, items))
    }

    async fn update(&self, id: Uuid, patch: RecipePatch) -> Result<Recipe, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let m = RecipeAM {
            id: Unchanged(id),
            name: patch.name.into_active(),
            instructions: patch.instructions.into_active(),
            calories: patch.calories.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&txn).await.map_err(row_err("Recipe", id))?;

        let items = match patch.items.into_option() {
            Some(items) => {
                ItemEntity::delete_many()
                    .filter(item::Column::RecipeId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
                insert_items(&txn, id, items).await?
            }
            None => items_of(&txn, id).await?,
        };

        txn.commit().await.map_err(db_err)?;
        Ok(recipe_from(updated, items))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = RecipeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
