use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::GeneratedMealPlan;
use crate::domain::repos::GeneratedPlansRepository;

use super::db_err;
use super::entity::generated_meal_plan::{ActiveModel, Column, Entity};

#[derive(Clone)]
pub struct OrmGeneratedPlansRepository {
    db: DatabaseConnection,
}

impl OrmGeneratedPlansRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GeneratedPlansRepository for OrmGeneratedPlansRepository {
    async fn create(&self, plan: GeneratedMealPlan) -> Result<GeneratedMealPlan, DomainError> {
        let m = ActiveModel {
            id: Set(plan.id),
            user_id: Set(plan.user_id),
            kind: Set(plan.kind.as_str().to_owned()),
            plan: Set(plan.plan),
            created_at: Set(plan.created_at),
        };
        m.insert(&self.db).await.map_err(db_err)?.try_into()
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<GeneratedMealPlan>, DomainError> {
        // v7 ids sort by creation time, which breaks ties between equal timestamps.
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(GeneratedMealPlan::try_from)
            .collect()
    }
}
