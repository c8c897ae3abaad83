use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CartDto, CreateCartReq, UpdateCartReq};
use crate::domain::service::CartsService;

pub async fn list_carts(
    Extension(svc): Extension<Arc<CartsService>>,
) -> ApiResult<EnvelopeResponse<Vec<CartDto>>> {
    let rows = svc.list().await?;
    Ok(ok_json(
        rows.into_iter().map(CartDto::from).collect(),
        "Carts Retrieved Successfully",
    ))
}

pub async fn get_cart(
    Extension(svc): Extension<Arc<CartsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<CartDto>> {
    let cart = svc.get(id).await?;
    Ok(ok_json(cart.into(), "Cart Retrieved Successfully"))
}

pub async fn create_cart(
    Extension(svc): Extension<Arc<CartsService>>,
    ValidJson(req): ValidJson<CreateCartReq>,
) -> ApiResult<EnvelopeResponse<CartDto>> {
    let cart = svc.create(req.into()).await?;
    Ok(created_json(cart.into(), "Cart Created Successfully"))
}

pub async fn update_cart(
    Extension(svc): Extension<Arc<CartsService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateCartReq>,
) -> ApiResult<EnvelopeResponse<CartDto>> {
    let cart = svc.update(id, req.into()).await?;
    Ok(ok_json(cart.into(), "Cart Updated Successfully"))
}

pub async fn delete_cart(
    Extension(svc): Extension<Arc<CartsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Cart Deleted Successfully"))
}
