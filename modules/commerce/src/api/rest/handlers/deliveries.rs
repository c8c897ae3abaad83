use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateDeliveryReq, DeliveryDto, UpdateDeliveryReq};
use crate::domain::service::DeliveriesService;

pub async fn list_deliveries(
    Extension(svc): Extension<Arc<DeliveriesService>>,
) -> ApiResult<EnvelopeResponse<Vec<DeliveryDto>>> {
    let rows = svc.list().await?;
    Ok(ok_json(
        rows.into_iter().map(DeliveryDto::from).collect(),
        "Deliveries Retrieved Successfully",
    ))
}

pub async fn get_delivery(
    Extension(svc): Extension<Arc<DeliveriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<DeliveryDto>> {
    let delivery = svc.get(id).await?;
    Ok(ok_json(delivery.into(), "Delivery Retrieved Successfully"))
}

pub async fn create_delivery(
    Extension(svc): Extension<Arc<DeliveriesService>>,
    ValidJson(req): ValidJson<CreateDeliveryReq>,
) -> ApiResult<EnvelopeResponse<DeliveryDto>> {
    let delivery = svc.create(req.into()).await?;
    Ok(created_json(delivery.into(), "Delivery Created Successfully"))
}

pub async fn update_delivery(
    Extension(svc): Extension<Arc<DeliveriesService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateDeliveryReq>,
) -> ApiResult<EnvelopeResponse<DeliveryDto>> {
    let delivery = svc.update(id, req.into()).await?;
    Ok(ok_json(delivery.into(), "Delivery Updated Successfully"))
}

pub async fn delete_delivery(
    Extension(svc): Extension<Arc<DeliveriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Delivery Deleted Successfully"))
}
