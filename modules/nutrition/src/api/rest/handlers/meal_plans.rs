use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateMealPlanReq, MealPlanDto, UpdateMealPlanReq};
use crate::domain::service::MealPlansService;

pub async fn list_meal_plans(
    Extension(svc): Extension<Arc<MealPlansService>>,
) -> ApiResult<EnvelopeResponse<Vec<MealPlanDto>>> {
    let plans = svc.list().await?;
    Ok(ok_json(
        plans.into_iter().map(MealPlanDto::from).collect(),
        "Meal Plans Retrieved Successfully",
    ))
}

pub async fn get_meal_plan(
    Extension(svc): Extension<Arc<MealPlansService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<MealPlanDto>> {
    let plan = svc.get(id).await?;
    Ok(ok_json(plan.into(), "Meal Plan Retrieved Successfully"))
}

pub async fn create_meal_plan(
    Extension(svc): Extension<Arc<MealPlansService>>,
    ValidJson(req): ValidJson<CreateMealPlanReq>,
) -> ApiResult<EnvelopeResponse<MealPlanDto>> {
    let plan = svc.create(req.into()).await?;
    Ok(created_json(plan.into(), "Meal Plan Created Successfully"))
}

pub async fn update_meal_plan(
    Extension(svc): Extension<Arc<MealPlansService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateMealPlanReq>,
) -> ApiResult<EnvelopeResponse<MealPlanDto>> {
    let plan = svc.update(id, req.into()).await?;
    Ok(ok_json(plan.into(), "Meal Plan Updated Successfully"))
}

pub async fn delete_meal_plan(
    Extension(svc): Extension<Arc<MealPlansService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Meal Plan Deleted Successfully"))
}
