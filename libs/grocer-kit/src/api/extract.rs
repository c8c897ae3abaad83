//! Request extractors that reject with [`ApiError`] instead of axum's plain-text rejections.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use super::error::ApiError;

/// A single `{id}` path segment parsed as a UUID.
///
/// Any parse failure is reported as `400 {"message": "invalid uuid"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub Uuid);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_uuid())?;
        let id = Uuid::parse_str(&raw).map_err(|_| ApiError::invalid_uuid())?;
        Ok(Self(id))
    }
}

/// JSON body that is deserialized and then checked with `validator` rules.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        value
            .validate()
            .map_err(|e| ApiError::bad_request(validation_message(&e)))?;
        Ok(Self(value))
    }
}

/// Flatten `validator` errors into a stable, human-readable message.
#[must_use]
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string);
                format!("{field}: {detail}")
            })
        })
        .collect();

    if parts.is_empty() {
        // Nested (struct/list) failures only render through Display.
        return format!("validation failed: {errors}");
    }

    parts.sort();
    format!("validation failed: {}", parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use axum::{Router, body::Body, http::StatusCode, routing::get, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt as _;

    #[derive(Debug, Deserialize, Validate)]
    struct NewThing {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(exclusive_min = 0.0))]
        price: f64,
    }

    async fn echo_id(PathId(id): PathId) -> String {
        id.to_string()
    }

    async fn accept(ValidJson(thing): ValidJson<NewThing>) -> String {
        format!("{}:{}", thing.name, thing.price)
    }

    fn router() -> Router {
        Router::new()
            .route("/things/{id}", get(echo_id))
            .route("/things", post(accept))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn path_id_rejects_invalid_uuid() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/things/invalid-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "invalid uuid"})
        );
    }

    #[tokio::test]
    async fn path_id_accepts_uuid() {
        let id = Uuid::new_v4();
        let response = router()
            .oneshot(
                Request::builder()
                    .uri(format!("/things/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn valid_json_reports_rule_failures() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/things")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"","price":-1}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("name: must not be empty"), "{message}");
        assert!(message.contains("price: range"), "{message}");
    }

    #[tokio::test]
    async fn valid_json_reports_malformed_body() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/things")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["message"].is_string());
    }
}
