use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateProductReq, ProductDto, UpdateProductReq};
use crate::api::rest::extract::ProductForm;
use crate::domain::service::ProductsService;

pub async fn list_products(
    Extension(svc): Extension<Arc<ProductsService>>,
) -> ApiResult<EnvelopeResponse<Vec<ProductDto>>> {
    let products = svc.list().await?;
    Ok(ok_json(
        products.into_iter().map(ProductDto::from).collect(),
        "Products Retrieved Successfully",
    ))
}

pub async fn get_product(
    Extension(svc): Extension<Arc<ProductsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<ProductDto>> {
    let product = svc.get(id).await?;
    Ok(ok_json(product.into(), "Product Retrieved Successfully"))
}

/// Accepts JSON or `multipart/form-data` with a `payload` field and optional `image`.
pub async fn create_product(
    Extension(svc): Extension<Arc<ProductsService>>,
    form: ProductForm<CreateProductReq>,
) -> ApiResult<EnvelopeResponse<ProductDto>> {
    let product = svc.create(form.payload.into(), form.image).await?;
    Ok(created_json(product.into(), "Product Created Successfully"))
}

pub async fn update_product(
    Extension(svc): Extension<Arc<ProductsService>>,
    PathId(id): PathId,
    form: ProductForm<UpdateProductReq>,
) -> ApiResult<EnvelopeResponse<ProductDto>> {
    let product = svc.update(id, form.payload.into(), form.image).await?;
    Ok(ok_json(product.into(), "Product Updated Successfully"))
}

pub async fn delete_product(
    Extension(svc): Extension<Arc<ProductsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Product Deleted Successfully"))
}
