use grocer_kit::api::ApiError;
use tracing::{error, warn};

use crate::domain::error::{DomainError, GenAiError};

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::NotFound { .. } => ApiError::not_found(),
            DomainError::NoFieldsToUpdate
            | DomainError::Conflict { .. }
            | DomainError::Constraint { .. } => ApiError::bad_request(e.to_string()),
            DomainError::Database { .. } => {
                error!(error = %e, "nutrition request failed");
                ApiError::internal()
            }
        }
    }
}

impl From<GenAiError> for ApiError {
    fn from(e: GenAiError) -> Self {
        match &e {
            GenAiError::UserNotFound(_) => ApiError::not_found(),
            GenAiError::Profile { .. } => {
                error!(error = %e, "meal planner profile lookup failed");
                ApiError::bad_gateway(e.to_string())
            }
            GenAiError::MissingApiKey
            | GenAiError::Client { .. }
            | GenAiError::Upstream { .. }
            | GenAiError::EmptyOutput
            | GenAiError::InvalidPlan { .. } => {
                warn!(error = %e, "meal plan generation failed");
                ApiError::bad_gateway(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn maps_domain_statuses() {
        let cases = [
            (DomainError::not_found("Recipe", Uuid::nil()), StatusCode::NOT_FOUND),
            (DomainError::NoFieldsToUpdate, StatusCode::BAD_REQUEST),
            (DomainError::constraint("FOREIGN KEY"), StatusCode::BAD_REQUEST),
            (DomainError::database("locked"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn generation_failures_are_bad_gateway_with_details() {
        let err = ApiError::from(GenAiError::invalid_plan("expected value", "nope"));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert!(err.message.contains("nope"), "{}", err.message);

        assert_eq!(
            ApiError::from(GenAiError::MissingApiKey).status,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(GenAiError::UserNotFound(Uuid::nil())).status,
            StatusCode::NOT_FOUND
        );

        let err = ApiError::from(GenAiError::profile("pool timed out"));
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert!(err.message.contains("pool timed out"), "{}", err.message);
    }
}
