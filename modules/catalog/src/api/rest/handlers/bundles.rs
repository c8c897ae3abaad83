use std::sync::Arc;

use grocer_kit::api::prelude::*;

use crate::api::rest::dto::{BundleDto, CreateBundleReq, UpdateBundleReq};
use crate::domain::service::BundlesService;

pub async fn list_bundles(
    Extension(svc): Extension<Arc<BundlesService>>,
) -> ApiResult<EnvelopeResponse<Vec<BundleDto>>> {
    let bundles = svc.list().await?;
    Ok(ok_json(
        bundles.into_iter().map(BundleDto::from).collect(),
        "Bundles Retrieved Successfully",
    ))
}

pub async fn get_bundle(
    Extension(svc): Extension<Arc<BundlesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<BundleDto>> {
    let bundle = svc.get(id).await?;
    Ok(ok_json(bundle.into(), "Bundle Retrieved Successfully"))
}

pub async fn create_bundle(
    Extension(svc): Extension<Arc<BundlesService>>,
    ValidJson(req): ValidJson<CreateBundleReq>,
) -> ApiResult<EnvelopeResponse<BundleDto>> {
    let bundle = svc.create(req.into()).await?;
    Ok(created_json(bundle.into(), "Bundle Created Successfully"))
}

pub async fn update_bundle(
    Extension(svc): Extension<Arc<BundlesService>>,
    PathId(id): PathId,
    ValidJson(req): ValidJson<UpdateBundleReq>,
) -> ApiResult<EnvelopeResponse<BundleDto>> {
    let bundle = svc.update(id, req.into()).await?;
    Ok(ok_json(bundle.into(), "Bundle Updated Successfully"))
}

pub async fn delete_bundle(
    Extension(svc): Extension<Arc<BundlesService>>,
    PathId(id): PathId,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete(id).await?;
    Ok(accepted_json("Bundle Deleted Successfully"))
}
