use grocer_kit::api::ApiError;
use tracing::error;

use crate::domain::error::DomainError;

/// Map domain errors to HTTP errors so `?` works in handlers.
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::NotFound { .. } => ApiError::not_found(),
            DomainError::NoFieldsToUpdate
            | DomainError::Conflict { .. }
            | DomainError::Constraint { .. } => ApiError::bad_request(e.to_string()),
            DomainError::InvalidCredentials | DomainError::Unauthorized { .. } => {
                ApiError::unauthorized()
            }
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                error!(error = %e, "accounts request failed");
                ApiError::internal()
            }
        }
    }
}
