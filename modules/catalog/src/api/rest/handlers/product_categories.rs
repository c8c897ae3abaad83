use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateProductCategoryReq, ProductCategoryDto, UpdateProductCategoryReq};
use crate::domain::service::ProductCategoriesService;

pub async fn list_product_categories(
    Extension(svc): Extension<Arc<ProductCategoriesService>>,
) -> ApiResult<EnvelopeResponse<Vec<ProductCategoryDto>>> {
    let links = svc.list().await?;
    Ok(ok_json(
        links.into_iter().map(ProductCategoryDto::from).collect(),
        "Product Categories Retrieved Successfully",
    ))
}

pub async fn get_product_category(
    Extension(svc): Extension<Arc<ProductCategoriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<ProductCategoryDto>> {
    let link = svc.get(id).await?;
    Ok(ok_json(link.into(), "Product Category Retrieved Successfully"))
}

pub async fn create_product_category(
    Extension(svc): Extension<Arc<ProductCategoriesService>>,
    ValidJson(req): ValidJson<CreateProductCategoryReq>,
) -> ApiResult<EnvelopeResponse<ProductCategoryDto>> {
    let link = svc.create(req.into()).await?;
    Ok(created_json(link.into(), "Product Category Created Successfully"))
}

pub async fn update_product_category(
    Extension(svc): Extension<Arc<ProductCategoriesService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateProductCategoryReq>,
) -> ApiResult<EnvelopeResponse<ProductCategoryDto>> {
    let link = svc.update(id, req.into()).await?;
    Ok(ok_json(link.into(), "Product Category Updated Successfully"))
}

pub async fn delete_product_category(
    Extension(svc): Extension<Arc<ProductCategoriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Product Category Deleted Successfully"))
}
