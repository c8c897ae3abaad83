use crate::domain::error::DomainError;
use crate::domain::models::{
    GeneratedMealPlan, MealPlan, MealPlanItem, MealSlot, PlanKind, Recipe, RecipeItem,
};

use super::entity::{generated_meal_plan, meal_plan, meal_plan_item, recipe, recipe_item};

pub(crate) fn recipe_from(m: recipe::Model, mut items: Vec<recipe_item::Model>) -> Recipe {
    items.sort_by_key(|i| i.position);
    Recipe {
        id: m.id,
        name: m.name,
        instructions: m.instructions,
        calories: m.calories,
        items: items
            .into_iter()
            .map(|i| RecipeItem {
                product_id: i.product_id,
                amount: i.amount,
                unit: i.unit,
            })
            .collect(),
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

/// Fails only when a stored slot is not one of the known meal slots.
pub(crate) fn meal_plan_from(
    m: meal_plan::Model,
    mut items: Vec<meal_plan_item::Model>,
) -> Result<MealPlan, DomainError> {
    items.sort_by_key(|i| i.position);
    let items = items
        .into_iter()
        .map(|i| {
            Ok(MealPlanItem {
                day: i.day,
                slot: i.slot.parse::<MealSlot>().map_err(DomainError::database)?,
                recipe_id: i.recipe_id,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;
    Ok(MealPlan {
        id: m.id,
        user_id: m.user_id,
        week_start: m.week_start,
        items,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

impl TryFrom<generated_meal_plan::Model> for GeneratedMealPlan {
    type Error = DomainError;

    fn try_from(m: generated_meal_plan::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            user_id: m.user_id,
            kind: m.kind.parse::<PlanKind>().map_err(DomainError::database)?,
            plan: m.plan,
            created_at: m.created_at,
        })
    }
}
