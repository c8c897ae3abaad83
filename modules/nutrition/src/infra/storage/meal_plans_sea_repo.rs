use async_trait::async_trait;
use grocer_kit::PatchSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait, Unchanged,
};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::{MealPlan, MealPlanItem, MealPlanPatch};
use crate::domain::repos::MealPlansRepository;

use super::entity::meal_plan::{ActiveModel as PlanAM, Column, Entity as PlanEntity};
use super::entity::meal_plan_item::{self as item, ActiveModel as ItemAM, Entity as ItemEntity};
use super::mapper::meal_plan_from;
use super::{db_err, row_err};

#[derive(Clone)]
pub struct OrmMealPlansRepository {
    db: DatabaseConnection,
}

impl OrmMealPlansRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn items_of<C: ConnectionTrait>(
    conn: &C,
    meal_plan_id: Uuid,
) -> Result<Vec<item::Model>, DomainError> {
    ItemEntity::find()
        .filter(item::Column::MealPlanId.eq(meal_plan_id))
        .all(conn)
        .await
        .map_err(db_err)
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    meal_plan_id: Uuid,
    items: Vec<MealPlanItem>,
) -> Result<Vec<item::Model>, DomainError> {
    let rows: Vec<item::Model> = (0_i32..)
        .zip(items)
        .map(|(position, it)| item::Model {
            id: Uuid::now_v7(),
            meal_plan_id,
            day: it.day,
            slot: it.slot.as_str().to_owned(),
            recipe_id: it.recipe_id,
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
impl MealPlansRepository for OrmMealPlansRepository {
    async fn list(&self) -> Result<Vec<MealPlan>, DomainError> {
        let rows = PlanEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = rows
            .load_many(ItemEntity, &self.db)
            .await
            .map_err(db_err)?;
        rows.into_iter()
            .zip(items)
            .map(|(plan, items)| meal_plan_from(plan, items))
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MealPlan>, DomainError> {
        let Some(found) = PlanEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        let items = items_of(&self.db, id).await?;
        meal_plan_from(found, items).map(Some)
    }

    async fn create(&self, plan: MealPlan) -> Result<MealPlan, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let m = PlanAM {
            id: Set(plan.id),
            user_id: Set(plan.user_id),
            week_start: Set(plan.week_start),
            created_at: Set(plan.created_at),
            updated_at: Set(plan.updated_at),
        };
        let inserted = m.insert(&txn).await.map_err(db_err)?;
        let items = insert_items(&txn, plan.id, plan.items).await?;

        txn.commit().await.map_err(db_err)?;
        meal_plan_from(inserted, items)
    }

    async fn update(&self, id: Uuid, patch: MealPlanPatch) -> Result<MealPlan, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::NoFieldsToUpdate);
        }

        let txn = self.db.begin().await.map_err(db_err)?;

        let m = PlanAM {
            id: Unchanged(id),
            user_id: patch.user_id.into_active(),
            week_start: patch.week_start.into_active(),
            updated_at: Set(OffsetDateTime::now_utc()),
            ..Default::default()
        };
        let updated = m.update(&txn).await.map_err(row_err("MealPlan", id))?;

        let items = match patch.items.into_option() {
            Some(items) => {
                ItemEntity::delete_many()
                    .filter(item::Column::MealPlanId.eq(id))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
                insert_items(&txn, id, items).await?
            }
            None => items_of(&txn, id).await?,
        };

        txn.commit().await.map_err(db_err)?;
        meal_plan_from(updated, items)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = PlanEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}
