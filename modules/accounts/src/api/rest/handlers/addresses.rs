use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{AddressDto, CreateAddressReq, UpdateAddressReq};
use crate::domain::service::AddressesService;

pub async fn list_addresses(
    Extension(svc): Extension<Arc<AddressesService>>,
) -> ApiResult<EnvelopeResponse<Vec<AddressDto>>> {
    let addresses = svc.list().await?;
    Ok(ok_json(
        addresses.into_iter().map(AddressDto::from).collect(),
        "Addresses Retrieved Successfully",
    ))
}

pub async fn get_address(
    Extension(svc): Extension<Arc<AddressesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<AddressDto>> {
    let address = svc.get(id).await?;
    Ok(ok_json(address.into(), "Address Retrieved Successfully"))
}

pub async fn create_address(
    Extension(svc): Extension<Arc<AddressesService>>,
    ValidJson(req): ValidJson<CreateAddressReq>,
) -> ApiResult<EnvelopeResponse<AddressDto>> {
    let address = svc.create(req.into()).await?;
    Ok(created_json(address.into(), "Address Created Successfully"))
}

pub async fn update_address(
    Extension(svc): Extension<Arc<AddressesService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateAddressReq>,
) -> ApiResult<EnvelopeResponse<AddressDto>> {
    let address = svc.update(id, req.into()).await?;
    Ok(ok_json(address.into(), "Address Updated Successfully"))
}

pub async fn delete_address(
    Extension(svc): Extension<Arc<AddressesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Address Deleted Successfully"))
}
