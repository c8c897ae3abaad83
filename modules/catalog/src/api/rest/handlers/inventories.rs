use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateInventoryReq, InventoryDto, UpdateInventoryReq};
use crate::domain::service::InventoriesService;

pub async fn list_inventories(
    Extension(svc): Extension<Arc<InventoriesService>>,
) -> ApiResult<EnvelopeResponse<Vec<InventoryDto>>> {
    let inventories = svc.list().await?;
    Ok(ok_json(
        inventories.into_iter().map(InventoryDto::from).collect(),
        "Inventories Retrieved Successfully",
    ))
}

pub async fn get_inventory(
    Extension(svc): Extension<Arc<InventoriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<InventoryDto>> {
    let inventory = svc.get(id).await?;
    Ok(ok_json(inventory.into(), "Inventory Retrieved Successfully"))
}

pub async fn create_inventory(
    Extension(svc): Extension<Arc<InventoriesService>>,
    ValidJson(req): ValidJson<CreateInventoryReq>,
) -> ApiResult<EnvelopeResponse<InventoryDto>> {
    let inventory = svc.create(req.into()).await?;
    Ok(created_json(inventory.into(), "Inventory Created Successfully"))
}

pub async fn update_inventory(
    Extension(svc): Extension<Arc<InventoriesService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateInventoryReq>,
) -> ApiResult<EnvelopeResponse<InventoryDto>> {
    let inventory = svc.update(id, req.into()).await?;
    Ok(ok_json(inventory.into(), "Inventory Updated Successfully"))
}

pub async fn delete_inventory(
    Extension(svc): Extension<Arc<InventoriesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Inventory Deleted Successfully"))
}
