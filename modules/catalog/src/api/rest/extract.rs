//! Product create/update bodies arrive either as JSON or as a multipart form.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use grocer_kit::api::{ApiError, ValidJson, validation_message};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::models::ImageUpload;

/// Multipart field carrying the JSON payload.
pub const PAYLOAD_FIELD: &str = "payload";
/// Multipart field carrying the optional image file.
pub const IMAGE_FIELD: &str = "image";

/// Validated payload plus an optional image.
///
/// `multipart/form-data` requests carry the JSON in a `payload` field and the file in
/// `image`; any other content type is read as a plain JSON body.
#[derive(Debug)]
pub struct ProductForm<T> {
    pub payload: T,
    pub image: Option<ImageUpload>,
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

impl<T, S> FromRequest<S> for ProductForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let ValidJson(payload) = ValidJson::<T>::from_request(req, state).await?;
            return Ok(Self {
                payload,
                image: None,
            });
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        let mut raw_payload = None;
        let mut image = None;
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_owned();
            match name.as_str() {
                PAYLOAD_FIELD => {
                    raw_payload = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| ApiError::bad_request(e.body_text()))?,
                    );
                }
                IMAGE_FIELD => {
                    let filename = field.file_name().unwrap_or_default().to_owned();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::bad_request(e.body_text()))?;
                    // Browsers send an empty part when no file was picked.
                    if !(filename.is_empty() && data.is_empty()) {
                        image = Some(ImageUpload { filename, data });
                    }
                }
                _ => {}
            }
        }

        let raw_payload = raw_payload.unwrap_or_else(|| "{}".to_owned());
        let payload: T = serde_json::from_str(&raw_payload)
            .map_err(|e| ApiError::bad_request(format!("invalid payload: {e}")))?;
        payload
            .validate()
            .map_err(|e| ApiError::bad_request(validation_message(&e)))?;

        Ok(Self { payload, image })
    }
}
