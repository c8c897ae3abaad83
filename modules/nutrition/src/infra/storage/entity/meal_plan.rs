use sea_orm::entity::prelude::*;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meal_plans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: Date,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::meal_plan_item::Entity")]
    MealPlanItem,
}

impl Related<super::meal_plan_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MealPlanItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
