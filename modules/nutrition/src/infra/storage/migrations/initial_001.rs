//! Recipes reference catalog products and plans reference accounts users, so the
//! accounts and catalog migrations must run first.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn timestamp(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Recipes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Recipes::Name).string().not_null())
                    .col(ColumnDef::new(Recipes::Instructions).text().not_null())
                    .col(
                        ColumnDef::new(Recipes::Calories)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(timestamp(Recipes::CreatedAt))
                    .col(timestamp(Recipes::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RecipeItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RecipeItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RecipeItems::RecipeId).uuid().not_null())
                    .col(ColumnDef::new(RecipeItems::ProductId).uuid().not_null())
                    .col(ColumnDef::new(RecipeItems::Amount).double().not_null())
                    .col(ColumnDef::new(RecipeItems::Unit).string().not_null())
                    .col(ColumnDef::new(RecipeItems::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_items_recipe")
                            .from(RecipeItems::Table, RecipeItems::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_items_product")
                            .from(RecipeItems::Table, RecipeItems::ProductId)
                            .to(Alias::new("products"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MealPlans::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MealPlans::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(MealPlans::UserId).uuid().not_null())
                    .col(ColumnDef::new(MealPlans::WeekStart).date().not_null())
                    .col(timestamp(MealPlans::CreatedAt))
                    .col(timestamp(MealPlans::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_plans_user")
                            .from(MealPlans::Table, MealPlans::UserId)
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MealPlanItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MealPlanItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MealPlanItems::MealPlanId).uuid().not_null())
                    .col(ColumnDef::new(MealPlanItems::Day).integer().not_null())
                    .col(ColumnDef::new(MealPlanItems::Slot).string().not_null())
                    .col(ColumnDef::new(MealPlanItems::RecipeId).uuid().not_null())
                    .col(ColumnDef::new(MealPlanItems::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_plan_items_plan")
                            .from(MealPlanItems::Table, MealPlanItems::MealPlanId)
                            .to(MealPlans::Table, MealPlans::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_plan_items_recipe")
                            .from(MealPlanItems::Table, MealPlanItems::RecipeId)
                            .to(Recipes::Table, Recipes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_meal_plan_items_plan_id")
                    .table(MealPlanItems::Table)
                    .col(MealPlanItems::MealPlanId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GeneratedMealPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GeneratedMealPlans::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GeneratedMealPlans::UserId).uuid().not_null())
                    .col(ColumnDef::new(GeneratedMealPlans::Kind).string().not_null())
                    .col(ColumnDef::new(GeneratedMealPlans::Plan).text().not_null())
                    .col(timestamp(GeneratedMealPlans::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_generated_meal_plans_user")
                            .from(GeneratedMealPlans::Table, GeneratedMealPlans::UserId)
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_generated_meal_plans_user_id")
                    .table(GeneratedMealPlans::Table)
                    .col(GeneratedMealPlans::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(GeneratedMealPlans::Table)
                    .table(MealPlanItems::Table)
                    .table(MealPlans::Table)
                    .table(RecipeItems::Table)
                    .table(Recipes::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Recipes {
    Table,
    Id,
    Name,
    Instructions,
    Calories,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RecipeItems {
    Table,
    Id,
    RecipeId,
    ProductId,
    Amount,
    Unit,
    Position,
}

#[derive(DeriveIden)]
enum MealPlans {
    Table,
    Id,
    UserId,
    WeekStart,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MealPlanItems {
    Table,
    Id,
    MealPlanId,
    Day,
    Slot,
    RecipeId,
    Position,
}

#[derive(DeriveIden)]
enum GeneratedMealPlans {
    Table,
    Id,
    UserId,
    Kind,
    Plan,
    CreatedAt,
}
