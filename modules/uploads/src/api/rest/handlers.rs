use std::sync::Arc;

use axum::extract::{Multipart, Path};
use bytes::Bytes;
use grocer_kit::api::prelude::*;
use tracing::{info, warn};

use crate::domain::error::UploadError;
use crate::domain::service::UploadService;

use super::dto::ImageDto;

pub async fn upload_image(
    Extension(svc): Extension<Arc<UploadService>>,
    multipart: Multipart,
) -> ApiResult<EnvelopeResponse<ImageDto>> {
    store(&svc, multipart, None).await
}

pub async fn upload_image_into_folder(
    Extension(svc): Extension<Arc<UploadService>>,
    Path(folder): Path<String>,
    multipart: Multipart,
) -> ApiResult<EnvelopeResponse<ImageDto>> {
    store(&svc, multipart, Some(&folder)).await
}

pub async fn get_image_url(
    Extension(svc): Extension<Arc<UploadService>>,
    Path(path): Path<String>,
) -> ApiResult<EnvelopeResponse<ImageDto>> {
    let url = svc.image_url(&path).await?;
    Ok(ok_json(ImageDto { path, url }, "Image URL Retrieved Successfully"))
}

pub async fn delete_image(
    Extension(svc): Extension<Arc<UploadService>>,
    Path(path): Path<String>,
) -> ApiResult<EnvelopeResponse<Option<()>>> {
    svc.delete_image(&path).await?;
    Ok(accepted_json("Image Deleted Successfully"))
}

async fn store(
    svc: &UploadService,
    multipart: Multipart,
    folder: Option<&str>,
) -> ApiResult<EnvelopeResponse<ImageDto>> {
    let (filename, data) = read_image_field(multipart).await?;
    info!(%filename, size = data.len(), "received image upload");

    let path = svc.upload_image(&filename, data, folder).await?;
    let url = svc.image_url(&path).await.inspect_err(|e| {
        warn!(%path, error = %e, "stored image has no url, object left in storage");
    })?;
    Ok(created_json(ImageDto { path, url }, "Image Uploaded Successfully"))
}

/// First multipart field named `file` or `image`.
async fn read_image_field(mut multipart: Multipart) -> Result<(String, Bytes), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?
    {
        if matches!(field.name(), Some("file" | "image")) {
            let filename = field.file_name().unwrap_or_default().to_owned();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(e.body_text()))?;
            return Ok((filename, data));
        }
    }
    Err(UploadError::MissingFile.into())
}
