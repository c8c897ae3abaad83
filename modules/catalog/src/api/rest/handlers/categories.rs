use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CategoryDto, CreateCategoryReq, UpdateCategoryReq};
use crate::domain::service::CategoriesService;

pub async fn list_categories(
    Extension(svc): Extension<Arc<CategoriesService>>,
) -> ApiResult<EnvelopeResponse<Vec<CategoryDto>>> {
    let categories = svc.list().await?;
    Ok(ok_json(
        categories.into_iter().map(CategoryDto::from).collect(),
        "Categories Retrieved Successfully",
    ))
}

pub async fn get_category(
    Extension(svc): Extension<Arc<CategoriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<CategoryDto>> {
    let category = svc.get(id).await?;
    Ok(ok_json(category.into(), "Category Retrieved Successfully"))
}

pub async fn create_category(
    Extension(svc): Extension<Arc<CategoriesService>>,
    ValidJson(req): ValidJson<CreateCategoryReq>,
) -> ApiResult<EnvelopeResponse<CategoryDto>> {
    let category = svc.create(req.into()).await?;
    Ok(created_json(category.into(), "Category Created Successfully"))
}

pub async fn update_category(
    Extension(svc): Extension<Arc<CategoriesService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateCategoryReq>,
) -> ApiResult<EnvelopeResponse<CategoryDto>> {
    let category = svc.update(id, req.into()).await?;
    Ok(ok_json(category.into(), "Category Updated Successfully"))
}

pub async fn delete_category(
    Extension(svc): Extension<Arc<CategoriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Category Deleted Successfully"))
}
