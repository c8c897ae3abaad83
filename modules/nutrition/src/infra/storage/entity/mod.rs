pub mod generated_meal_plan;
pub mod meal_plan;
pub mod meal_plan_item;
pub mod recipe;
pub mod recipe_item;
