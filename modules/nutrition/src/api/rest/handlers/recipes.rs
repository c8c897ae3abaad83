use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateRecipeReq, RecipeDto, UpdateRecipeReq};
use crate::domain::service::RecipesService;

pub async fn list_recipes(
    Extension(svc): Extension<Arc<RecipesService>>,
) -> ApiResult<EnvelopeResponse<Vec<RecipeDto>>> {
    let recipes = svc.list().await?;
    Ok(ok_json(
        recipes.into_iter().map(RecipeDto::from).collect(),
        "Recipes Retrieved Successfully",
    ))
}

pub async fn get_recipe(
    Extension(svc): Extension<Arc<RecipesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<RecipeDto>> {
    let recipe = svc.get(id).await?;
    Ok(ok_json(recipe.into(), "Recipe Retrieved Successfully"))
}

pub async fn create_recipe(
    Extension(svc): Extension<Arc<RecipesService>>,
    ValidJson(req): ValidJson<CreateRecipeReq>,
) -> ApiResult<EnvelopeResponse<RecipeDto>> {
    let recipe = svc.create(req.into()).await?;
    Ok(created_json(recipe.into(), "Recipe Created Successfully"))
}

pub async fn update_recipe(
    Extension(svc): Extension<Arc<RecipesService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateRecipeReq>,
) -> ApiResult<EnvelopeResponse<RecipeDto>> {
    let recipe = svc.update(id, req.into()).await?;
    Ok(ok_json(recipe.into(), "Recipe Updated Successfully"))
}

pub async fn delete_recipe(
    Extension(svc): Extension<Arc<RecipesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Recipe Deleted Successfully"))
}
