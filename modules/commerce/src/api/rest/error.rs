use grocer_kit::api::ApiError;
use tracing::error;

use crate::domain::error::DomainError;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::NotFound { .. } => ApiError::not_found(),
            DomainError::NoFieldsToUpdate
            | DomainError::Conflict { .. }
            | DomainError::Constraint { .. } => ApiError::bad_request(e.to_string()),
            DomainError::Database { .. } => {
                error!(error = %e, "commerce request failed");
                ApiError::internal()
            }
        }
    }
}
