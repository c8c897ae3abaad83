//! Prompt construction and model-output cleanup for the meal planner.

use std::fmt::Write as _;

use crate::domain::error::GenAiError;
use crate::domain::models::{MealRequest, PlanDay, PlanKind};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calorie direction derived from the free-text target.
#[must_use]
pub fn goal_instruction(target: &str) -> &'static str {
    let target = target.to_lowercase();
    if target.contains("loss") {
        "Aim for a moderate calorie deficit of roughly 300-500 kcal per day below maintenance."
    } else if target.contains("gain") {
        "Aim for a moderate calorie surplus of roughly 250-500 kcal per day above maintenance."
    } else {
        "Keep daily calories at maintenance."
    }
}

fn list_or_none(values: &[String]) -> String {
    let values: Vec<&str> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        "none".to_owned()
    } else {
        values.join(", ")
    }
}

fn or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "unknown"
    } else {
        value
    }
}

#[must_use]
pub fn build_prompt(req: &MealRequest, kind: PlanKind) -> String {
    let days = kind.days();
    let mut prompt = String::from(
        "You are a registered dietitian. Create a meal plan for the person below.\n\n",
    );

    // Writing into a String cannot fail.
    let _ = writeln!(prompt, "Profile:");
    let _ = writeln!(prompt, "- gender: {}", or_unknown(&req.gender));
    let _ = writeln!(prompt, "- age: {} years", req.age);
    let _ = writeln!(prompt, "- height: {} cm", req.height);
    let _ = writeln!(prompt, "- weight: {} kg", req.weight);
    let _ = writeln!(prompt, "- steps today: {}", req.steps_today);
    let _ = writeln!(prompt, "- active calories (24h): {} kcal", req.active_kcal_24h);
    let _ = writeln!(prompt, "- allergies: {}", list_or_none(&req.allergies));
    let _ = writeln!(prompt, "- preferences: {}", list_or_none(&req.preferences));
    let _ = writeln!(prompt, "- goal: {}", or_unknown(&req.target));
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "{}", goal_instruction(&req.target));
    let _ = writeln!(
        prompt,
        "Never include ingredients the person is allergic to."
    );
    let _ = writeln!(prompt);

    match kind {
        PlanKind::Weekly => {
            let _ = writeln!(
                prompt,
                "Return exactly {days} JSON objects, one per day from {} to {}.",
                WEEKDAYS[0], WEEKDAYS[6]
            );
        }
        PlanKind::Daily => {
            let _ = writeln!(prompt, "Return exactly {days} JSON object for today.");
        }
    }
    let _ = writeln!(
        prompt,
        "Each object must have the keys \"day\", \"breakfast\", \"lunch\", \"dinner\", \
         \"snacks\", \"total_calories\", \"protein_g\", \"carbs_g\" and \"fat_g\"."
    );
    prompt.push_str(
        "Respond with a JSON array only, without markdown fences or any other text.",
    );
    prompt
}

/// Removes a surrounding markdown code fence (with or without a language tag).
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // The info string (`json`, `JSON`, ...) may be followed by a newline or sit on one line with the body.
    let body = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()).trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parses model output into plan days.
///
/// Fences are stripped and a lone object is treated as a one-day plan.
pub fn parse_plan(raw: &str) -> Result<Vec<PlanDay>, GenAiError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(GenAiError::EmptyOutput);
    }

    let wrapped;
    let candidate = if cleaned.starts_with('{') && cleaned.ends_with('}') {
        wrapped = format!("[{cleaned}]");
        wrapped.as_str()
    } else {
        cleaned
    };

    serde_json::from_str::<Vec<PlanDay>>(candidate)
        .map_err(|e| GenAiError::invalid_plan(e.to_string(), raw))
}
