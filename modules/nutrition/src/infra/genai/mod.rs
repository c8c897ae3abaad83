//! Text-generation backends for the meal planner.

mod gemini;

pub use gemini::{GeminiClient, UnavailableGenerator};
