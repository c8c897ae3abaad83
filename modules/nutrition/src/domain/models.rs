use std::fmt;
use std::str::FromStr;

use grocer_kit::{Patch, PatchSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

// ==================== Recipe ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub instructions: String,
    pub calories: i32,
    pub items: Vec<RecipeItem>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeItem {
    pub product_id: Uuid,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub id: Option<Uuid>,
    pub name: String,
    pub instructions: String,
    pub calories: i32,
    pub items: Vec<RecipeItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipePatch {
    pub name: Patch<String>,
    pub instructions: Patch<String>,
    pub calories: Patch<i32>,
    /// Replaces the full ingredient list.
    pub items: Patch<Vec<RecipeItem>>,
}

impl PatchSet for RecipePatch {
    fn is_empty(&self) -> bool {
        !(self.name.is_set()
            || self.instructions.is_set()
            || self.calories.is_set()
            || self.items.is_set())
    }
}

// ==================== MealPlan ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(format!("unknown meal slot: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlanItem {
    /// 0 = first day of the week, up to 6.
    pub day: i32,
    pub slot: MealSlot,
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: Date,
    pub items: Vec<MealPlanItem>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMealPlan {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub week_start: Date,
    pub items: Vec<MealPlanItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlanPatch {
    pub user_id: Patch<Uuid>,
    pub week_start: Patch<Date>,
    pub items: Patch<Vec<MealPlanItem>>,
}

impl PatchSet for MealPlanPatch {
    fn is_empty(&self) -> bool {
        !(self.user_id.is_set() || self.week_start.is_set() || self.items.is_set())
    }
}

// ==================== Generative planner ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Daily,
    Weekly,
}

impl PlanKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Number of day objects the model is asked for.
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
        }
    }
}

impl FromStr for PlanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            other => Err(format!("unknown plan kind: {other}")),
        }
    }
}

/// Stored profile fields used to complete a generation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub goal: Option<String>,
}

/// Planner input. Empty strings and zeros mean "not provided".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealRequest {
    pub gender: String,
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub steps_today: i64,
    pub active_kcal_24h: f64,
    pub allergies: Vec<String>,
    pub preferences: Vec<String>,
    pub target: String,
    pub user_id: Option<Uuid>,
}

impl MealRequest {
    /// True when any profile field would benefit from the stored profile.
    #[must_use]
    pub fn has_missing_profile_fields(&self) -> bool {
        self.gender.trim().is_empty()
            || self.age <= 0
            || self.height <= 0.0
            || self.weight <= 0.0
            || self.target.trim().is_empty()
    }
}

/// One generated day; the model decides the keys.
pub type PlanDay = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPlan {
    pub steps_today: i64,
    pub active_kcal_24h: f64,
    pub plan: Vec<PlanDay>,
}

/// A generated plan kept for the user's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: PlanKind,
    /// Plan JSON exactly as returned to the client.
    pub plan: String,
    pub created_at: OffsetDateTime,
}
