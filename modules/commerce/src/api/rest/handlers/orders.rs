use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateOrderReq, OrderDto, UpdateOrderReq};
use crate::domain::service::OrdersService;

pub async fn list_orders(
    Extension(svc): Extension<Arc<OrdersService>>,
) -> ApiResult<EnvelopeResponse<Vec<OrderDto>>> {
    let rows = svc.list().await?;
    Ok(ok_json(
        rows.into_iter().map(OrderDto::from).collect(),
        "Orders Retrieved Successfully",
    ))
}

pub async fn get_order(
    Extension(svc): Extension<Arc<OrdersService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<OrderDto>> {
    let order = svc.get(id).await?;
    Ok(ok_json(order.into(), "Order Retrieved Successfully"))
}

pub async fn create_order(
    Extension(svc): Extension<Arc<OrdersService>>,
    ValidJson(req): ValidJson<CreateOrderReq>,
) -> ApiResult<EnvelopeResponse<OrderDto>> {
    let order = svc.create(req.into()).await?;
    Ok(created_json(order.into(), "Order Created Successfully"))
}

pub async fn update_order(
    Extension(svc): Extension<Arc<OrdersService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateOrderReq>,
) -> ApiResult<EnvelopeResponse<OrderDto>> {
    let order = svc.update(id, req.into()).await?;
    Ok(ok_json(order.into(), "Order Updated Successfully"))
}

pub async fn delete_order(
    Extension(svc): Extension<Arc<OrdersService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Order Deleted Successfully"))
}
