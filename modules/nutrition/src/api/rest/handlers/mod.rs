pub mod genai;
pub mod meal_plans;
pub mod recipes;
