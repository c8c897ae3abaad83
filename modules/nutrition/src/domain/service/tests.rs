use std::collections::BTreeMap;
use std::sync::Arc;

use grocer_kit::Patch;
use serde_json::json;
use time::macros::date;
use uuid::Uuid;

use super::{
    MealPlannerService, MealPlansService, RecipesService, build_prompt, goal_instruction,
    parse_plan, strip_code_fences,
};
use crate::domain::error::{DomainError, GenAiError};
use crate::domain::models::{
    MealPlanItem, MealRequest, MealSlot, NewMealPlan, NewRecipe, PlanKind, RecipeItem,
    RecipePatch, UserProfile,
};
use crate::domain::test_support::{
    InMemoryGeneratedPlans, InMemoryMealPlans, InMemoryRecipes, ScriptedGenerator, StaticProfiles,
};

const ONE_DAY: &str = r#"[{"day":"Monday","breakfast":"Oats","total_calories":2100}]"#;

fn stored_profile() -> UserProfile {
    UserProfile {
        gender: Some("female".to_owned()),
        age: Some(34),
        height_cm: Some(168.0),
        weight_kg: Some(61.5),
        goal: Some("weight loss".to_owned()),
    }
}

struct Harness {
    svc: MealPlannerService,
    generator: Arc<ScriptedGenerator>,
    history: Arc<InMemoryGeneratedPlans>,
    user_id: Uuid,
}

fn harness_with(generator: ScriptedGenerator, history: InMemoryGeneratedPlans) -> Harness {
    let user_id = Uuid::now_v7();
    let profiles = StaticProfiles {
        profiles: BTreeMap::from([(user_id, stored_profile())]),
        broken: false,
    };
    let generator = Arc::new(generator);
    let history = Arc::new(history);
    Harness {
        svc: MealPlannerService::new(Arc::new(profiles), generator.clone(), history.clone()),
        generator,
        history,
        user_id,
    }
}

fn harness(reply: &str) -> Harness {
    harness_with(
        ScriptedGenerator::replying(reply),
        InMemoryGeneratedPlans::default(),
    )
}

#[tokio::test]
async fn fallback_fills_only_missing_fields() {
    let h = harness(ONE_DAY);
    let request = MealRequest {
        gender: "male".to_owned(),
        age: 0,
        height: 180.0,
        weight: 0.0,
        target: String::new(),
        user_id: Some(h.user_id),
        ..Default::default()
    };

    let resolved = h.svc.resolve_profile(request).await.unwrap();

    assert_eq!(resolved.gender, "male");
    assert!((resolved.height - 180.0).abs() < f64::EPSILON);
    assert_eq!(resolved.age, 34);
    assert!((resolved.weight - 61.5).abs() < f64::EPSILON);
    assert_eq!(resolved.target, "weight loss");
}

#[tokio::test]
async fn complete_request_skips_profile_lookup() {
    let user_id = Uuid::now_v7();
    let svc = MealPlannerService::new(
        Arc::new(StaticProfiles {
            broken: true,
            ..Default::default()
        }),
        Arc::new(ScriptedGenerator::replying(ONE_DAY)),
        Arc::new(InMemoryGeneratedPlans::default()),
    );
    let request = MealRequest {
        gender: "female".to_owned(),
        age: 29,
        height: 170.0,
        weight: 60.0,
        target: "maintain".to_owned(),
        user_id: Some(user_id),
        ..Default::default()
    };

    let resolved = svc.resolve_profile(request.clone()).await.unwrap();
    assert_eq!(resolved, request);
}

#[tokio::test]
async fn unknown_user_is_reported() {
    let h = harness(ONE_DAY);
    let stranger = Uuid::new_v4();

    let err = h
        .svc
        .generate(
            PlanKind::Daily,
            MealRequest {
                user_id: Some(stranger),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err, GenAiError::UserNotFound(stranger));
    assert!(h.generator.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn profile_lookup_failure_is_a_hard_error() {
    let svc = MealPlannerService::new(
        Arc::new(StaticProfiles {
            broken: true,
            ..Default::default()
        }),
        Arc::new(ScriptedGenerator::replying(ONE_DAY)),
        Arc::new(InMemoryGeneratedPlans::default()),
    );

    let err = svc
        .generate(
            PlanKind::Weekly,
            MealRequest {
                user_id: Some(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GenAiError::Profile { .. }), "{err:?}");
}

#[tokio::test]
async fn weekly_prompt_uses_resolved_profile() {
    let h = harness(ONE_DAY);

    h.svc
        .generate(
            PlanKind::Weekly,
            MealRequest {
                allergies: vec!["peanuts".to_owned()],
                user_id: Some(h.user_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let prompt = h.generator.last_prompt();
    assert!(prompt.contains("age: 34 years"), "{prompt}");
    assert!(prompt.contains("allergies: peanuts"), "{prompt}");
    assert!(prompt.contains("deficit"), "{prompt}");
    assert!(prompt.contains("exactly 7 JSON objects"), "{prompt}");
}

#[tokio::test]
async fn single_object_reply_is_wrapped_and_saved() {
    let h = harness("```json\n{\"day\":\"Today\",\"dinner\":\"Lentil soup\"}\n```");

    let generated = h
        .svc
        .generate(
            PlanKind::Daily,
            MealRequest {
                steps_today: 8_500,
                active_kcal_24h: 420.0,
                user_id: Some(h.user_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(generated.plan.len(), 1);
    assert_eq!(generated.plan[0]["dinner"], json!("Lentil soup"));
    assert_eq!(generated.steps_today, 8_500);

    let saved = h.history.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].kind, PlanKind::Daily);
    assert_eq!(saved[0].user_id, h.user_id);
}

#[tokio::test]
async fn anonymous_requests_are_not_saved() {
    let h = harness(ONE_DAY);

    h.svc
        .generate(PlanKind::Daily, MealRequest::default())
        .await
        .unwrap();

    assert!(h.history.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn save_failure_does_not_fail_generation() {
    let h = harness_with(
        ScriptedGenerator::replying(ONE_DAY),
        InMemoryGeneratedPlans {
            fail: true,
            ..Default::default()
        },
    );

    let generated = h
        .svc
        .generate(
            PlanKind::Daily,
            MealRequest {
                user_id: Some(h.user_id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(generated.plan.len(), 1);
}

#[tokio::test]
async fn generator_errors_propagate() {
    let h = harness_with(
        ScriptedGenerator::failing(GenAiError::MissingApiKey),
        InMemoryGeneratedPlans::default(),
    );

    let err = h
        .svc
        .generate(PlanKind::Daily, MealRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err, GenAiError::MissingApiKey);
}

#[test]
fn goal_instruction_follows_target() {
    assert!(goal_instruction("Weight LOSS").contains("deficit"));
    assert!(goal_instruction("muscle gain").contains("surplus"));
    assert!(goal_instruction("stay healthy").contains("maintenance"));
    assert!(goal_instruction("").contains("maintenance"));
}

#[test]
fn daily_prompt_asks_for_one_object() {
    let prompt = build_prompt(&MealRequest::default(), PlanKind::Daily);
    assert!(prompt.contains("exactly 1 JSON object"), "{prompt}");
    assert!(prompt.contains("allergies: none"), "{prompt}");
    assert!(prompt.contains("gender: unknown"), "{prompt}");
}

#[test]
fn fences_are_stripped() {
    assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
    assert_eq!(strip_code_fences("```\n[2]\n```\n"), "[2]");
    assert_eq!(strip_code_fences("  [3]  "), "[3]");
    assert_eq!(
        strip_code_fences(r#"```json [{"day":"Monday"}] ```"#),
        r#"[{"day":"Monday"}]"#
    );
    assert_eq!(
        strip_code_fences(r#"```{"day":"Monday"}```"#),
        r#"{"day":"Monday"}"#
    );
}

#[test]
fn single_line_fenced_plans_parse() {
    let days = parse_plan(r#"```json [{"day":"Monday"}] ```"#).unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(parse_plan(r#"```{"day":"Monday"}```"#).unwrap().len(), 1);
}

#[test]
fn parse_accepts_arrays_and_single_objects() {
    assert_eq!(parse_plan(ONE_DAY).unwrap().len(), 1);
    assert_eq!(parse_plan(r#"{"day":"Mon"}"#).unwrap().len(), 1);
    assert_eq!(
        parse_plan("```JSON\n[{\"day\":\"Mon\"},{\"day\":\"Tue\"}]\n```")
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn parse_failure_keeps_raw_text() {
    let err = parse_plan("Sorry, I cannot help with that.").unwrap_err();
    match err {
        GenAiError::InvalidPlan { raw, .. } => assert_eq!(raw, "Sorry, I cannot help with that."),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(parse_plan("```json\n```").unwrap_err(), GenAiError::EmptyOutput);
    assert!(matches!(
        parse_plan("[1, 2]").unwrap_err(),
        GenAiError::InvalidPlan { .. }
    ));
}

#[tokio::test]
async fn recipe_items_patch_replaces_list() {
    let svc = RecipesService::new(Arc::new(InMemoryRecipes::default()));
    let created = svc
        .create(NewRecipe {
            id: None,
            name: "Overnight oats".to_owned(),
            instructions: "Soak oats overnight.".to_owned(),
            calories: 380,
            items: vec![RecipeItem {
                product_id: Uuid::now_v7(),
                amount: 80.0,
                unit: "g".to_owned(),
            }],
        })
        .await
        .unwrap();

    let updated = svc
        .update(
            created.id,
            RecipePatch {
                items: Patch::Set(vec![]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.items.is_empty());
    assert_eq!(updated.calories, 380);

    assert_eq!(
        svc.update(created.id, RecipePatch::default())
            .await
            .unwrap_err(),
        DomainError::NoFieldsToUpdate
    );
}

#[tokio::test]
async fn meal_plan_delete_then_get_is_not_found() {
    let svc = MealPlansService::new(Arc::new(InMemoryMealPlans::default()));
    let id = Uuid::new_v4();
    let created = svc
        .create(NewMealPlan {
            id: Some(id),
            user_id: Uuid::now_v7(),
            week_start: date!(2026 - 03 - 02),
            items: vec![MealPlanItem {
                day: 0,
                slot: MealSlot::Breakfast,
                recipe_id: Uuid::now_v7(),
            }],
        })
        .await
        .unwrap();
    assert_eq!(created.id, id);

    svc.delete(id).await.unwrap();
    assert_eq!(
        svc.get(id).await.unwrap_err(),
        DomainError::not_found("MealPlan", id)
    );
}
