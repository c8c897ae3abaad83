use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{CreateVendorReq, UpdateVendorReq, VendorDto};
use crate::domain::service::VendorsService;

pub async fn list_vendors(
    Extension(svc): Extension<Arc<VendorsService>>,
) -> ApiResult<EnvelopeResponse<Vec<VendorDto>>> {
    let vendors = svc.list().await?;
    Ok(ok_json(
        vendors.into_iter().map(VendorDto::from).collect(),
        "Vendors Retrieved Successfully",
    ))
}

pub async fn get_vendor(
    Extension(svc): Extension<Arc<VendorsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<VendorDto>> {
    let vendor = svc.get(id).await?;
    Ok(ok_json(vendor.into(), "Vendor Retrieved Successfully"))
}

pub async fn create_vendor(
    Extension(svc): Extension<Arc<VendorsService>>,
    ValidJson(req): ValidJson<CreateVendorReq>,
) -> ApiResult<EnvelopeResponse<VendorDto>> {
    let vendor = svc.create(req.into()).await?;
    Ok(created_json(vendor.into(), "Vendor Created Successfully"))
}

pub async fn update_vendor(
    Extension(svc): Extension<Arc<VendorsService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateVendorReq>,
) -> ApiResult<EnvelopeResponse<VendorDto>> {
    let vendor = svc.update(id, req.into()).await?;
    Ok(ok_json(vendor.into(), "Vendor Updated Successfully"))
}

pub async fn delete_vendor(
    Extension(svc): Extension<Arc<VendorsService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Vendor Deleted Successfully"))
}
