use axum::http::StatusCode;
use grocer_kit::api::ApiError;
use tracing::error;

use crate::domain::error::DomainError;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::NotFound { .. } => ApiError::not_found(),
            DomainError::NoFieldsToUpdate
            | DomainError::Conflict { .. }
            | DomainError::Constraint { .. }
            | DomainError::InvalidImage { .. } => ApiError::bad_request(e.to_string()),
            DomainError::ImageStorage { .. } => {
                error!(error = %e, "product image storage failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
            }
            DomainError::Database { .. } => {
                error!(error = %e, "catalog request failed");
                ApiError::internal()
            }
        }
    }
}
