use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::{
    GeneratedMealPlan, GeneratedPlan, MealPlan, MealPlanItem, MealPlanPatch, MealRequest,
    MealSlot, NewMealPlan, NewRecipe, PlanDay, PlanKind, Recipe, RecipeItem, RecipePatch,
};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// ==================== Recipe ====================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct RecipeItemDto {
    pub product_id: Uuid,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[validate(length(min = 1, max = 32))]
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDto {
    pub id: Uuid,
    pub name: String,
    pub instructions: String,
    pub calories: i32,
    pub items: Vec<RecipeItemDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRecipeReq {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub calories: i32,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<RecipeItemDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRecipeReq {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub calories: Option<i32>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Option<Vec<RecipeItemDto>>,
}

impl From<RecipeItem> for RecipeItemDto {
    fn from(i: RecipeItem) -> Self {
        Self {
            product_id: i.product_id,
            amount: i.amount,
            unit: i.unit,
        }
    }
}

impl From<RecipeItemDto> for RecipeItem {
    fn from(i: RecipeItemDto) -> Self {
        Self {
            product_id: i.product_id,
            amount: i.amount,
            unit: i.unit,
        }
    }
}

impl From<Recipe> for RecipeDto {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            name: r.name,
            instructions: r.instructions,
            calories: r.calories,
            items: r.items.into_iter().map(Into::into).collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<CreateRecipeReq> for NewRecipe {
    fn from(req: CreateRecipeReq) -> Self {
        Self {
            id: req.id,
            name: req.name,
            instructions: req.instructions,
            calories: req.calories,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateRecipeReq> for RecipePatch {
    fn from(req: UpdateRecipeReq) -> Self {
        Self {
            name: req.name.into(),
            instructions: req.instructions.into(),
            calories: req.calories.into(),
            items: req
                .items
                .map(|items| items.into_iter().map(Into::into).collect::<Vec<_>>())
                .into(),
        }
    }
}

// ==================== MealPlan ====================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct MealPlanItemDto {
    #[validate(range(min = 0, max = 6))]
    pub day: i32,
    pub slot: MealSlot,
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlanDto {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(with = "iso_date")]
    pub week_start: Date,
    pub items: Vec<MealPlanItemDto>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMealPlanReq {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    #[serde(with = "iso_date")]
    pub week_start: Date,
    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<MealPlanItemDto>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMealPlanReq {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default, with = "iso_date::option")]
    pub week_start: Option<Date>,
    #[serde(default)]
    #[validate(nested)]
    pub items: Option<Vec<MealPlanItemDto>>,
}

impl From<MealPlanItem> for MealPlanItemDto {
    fn from(i: MealPlanItem) -> Self {
        Self {
            day: i.day,
            slot: i.slot,
            recipe_id: i.recipe_id,
        }
    }
}

impl From<MealPlanItemDto> for MealPlanItem {
    fn from(i: MealPlanItemDto) -> Self {
        Self {
            day: i.day,
            slot: i.slot,
            recipe_id: i.recipe_id,
        }
    }
}

impl From<MealPlan> for MealPlanDto {
    fn from(p: MealPlan) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            week_start: p.week_start,
            items: p.items.into_iter().map(Into::into).collect(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<CreateMealPlanReq> for NewMealPlan {
    fn from(req: CreateMealPlanReq) -> Self {
        Self {
            id: req.id,
            user_id: req.user_id,
            week_start: req.week_start,
            items: req.items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<UpdateMealPlanReq> for MealPlanPatch {
    fn from(req: UpdateMealPlanReq) -> Self {
        Self {
            user_id: req.user_id.into(),
            week_start: req.week_start.into(),
            items: req
                .items
                .map(|items| items.into_iter().map(Into::into).collect::<Vec<_>>())
                .into(),
        }
    }
}

// ==================== Generative planner ====================

/// Every field is optional on the wire; absent values count as "not provided".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct MealRequestDto {
    pub gender: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
    #[validate(range(min = 0.0))]
    pub height: f64,
    #[validate(range(min = 0.0))]
    pub weight: f64,
    #[serde(alias = "steps")]
    #[validate(range(min = 0))]
    pub steps_today: i64,
    #[serde(alias = "active_calories")]
    #[validate(range(min = 0.0))]
    pub active_kcal_24h: f64,
    pub allergies: Vec<String>,
    pub preferences: Vec<String>,
    pub target: String,
    pub user_id: Option<Uuid>,
}

impl From<MealRequestDto> for MealRequest {
    fn from(req: MealRequestDto) -> Self {
        Self {
            gender: req.gender,
            age: req.age,
            height: req.height,
            weight: req.weight,
            steps_today: req.steps_today,
            active_kcal_24h: req.active_kcal_24h,
            allergies: req.allergies,
            preferences: req.preferences,
            target: req.target,
            user_id: req.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneratedPlanDto {
    pub steps_today: i64,
    pub active_kcal_24h: f64,
    pub plan: Vec<PlanDay>,
}

impl From<GeneratedPlan> for GeneratedPlanDto {
    fn from(p: GeneratedPlan) -> Self {
        Self {
            steps_today: p.steps_today,
            active_kcal_24h: p.active_kcal_24h,
            plan: p.plan,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeneratedMealPlanDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: PlanKind,
    /// Stored plan JSON; echoed as JSON when it still parses, otherwise as text.
    pub plan: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<GeneratedMealPlan> for GeneratedMealPlanDto {
    fn from(p: GeneratedMealPlan) -> Self {
        let plan = serde_json::from_str(&p.plan).unwrap_or(serde_json::Value::String(p.plan));
        Self {
            id: p.id,
            user_id: p.user_id,
            kind: p.kind,
            plan,
            created_at: p.created_at,
        }
    }
}
