use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{GeneratedMealPlanDto, GeneratedPlanDto, MealRequestDto};
use crate::domain::models::PlanKind;
use crate::domain::service::MealPlannerService;

async fn generate(
    svc: &MealPlannerService,
    kind: PlanKind,
    req: MealRequestDto,
) -> ApiResult<EnvelopeResponse<GeneratedPlanDto>> {
    let generated = svc.generate(kind, req.into()).await?;
    Ok(ok_json(generated.into(), "Meal Plan Generated Successfully"))
}

pub async fn generate_weekly(
    Extension(svc): Extension<Arc<MealPlannerService>>,
    ValidJson(req): ValidJson<MealRequestDto>,
) -> ApiResult<EnvelopeResponse<GeneratedPlanDto>> {
    generate(&svc, PlanKind::Weekly, req).await
}

pub async fn generate_daily(
    Extension(svc): Extension<Arc<MealPlannerService>>,
    ValidJson(req): ValidJson<MealRequestDto>,
) -> ApiResult<EnvelopeResponse<GeneratedPlanDto>> {
    generate(&svc, PlanKind::Daily, req).await
}

pub async fn list_history(
    Extension(svc): Extension<Arc<MealPlannerService>>,
    PathId(user_id): PathId,
) -> ApiResult<EnvelopeResponse<Vec<GeneratedMealPlanDto>>> {
    let plans = svc.history(user_id).await?;
    Ok(ok_json(
        plans.into_iter().map(GeneratedMealPlanDto::from).collect(),
        "Generated Meal Plans Retrieved Successfully",
    ))
}
