//! Nutrition domain services.

mod meal_plans;
mod planner;
mod prompt;
mod recipes;

pub use meal_plans::MealPlansService;
pub use planner::MealPlannerService;
pub use prompt::{build_prompt, goal_instruction, parse_plan, strip_code_fences};
pub use recipes::RecipesService;

#[cfg(test)]
mod tests;
