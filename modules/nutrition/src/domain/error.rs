use thiserror::Error;
use uuid::Uuid;

/// Errors of the recipe and meal-plan resources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("no fields to update")]
    NoFieldsToUpdate,

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("constraint violation: {message}")]
    Constraint { message: String },

    #[error("database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Errors of the generative meal planner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenAiError {
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// The profile store could not be read.
    #[error("profile lookup failed: {message}")]
    Profile { message: String },

    #[error("generative AI api key is not configured")]
    MissingApiKey,

    #[error("failed to build generative AI client: {message}")]
    Client { message: String },

    #[error("generative AI request failed: {message}")]
    Upstream { message: String },

    #[error("generative AI returned no content")]
    EmptyOutput,

    /// Model output that is not a JSON array of objects. `raw` is the text as received.
    #[error("failed to parse meal plan: {message}; raw output: {raw}")]
    InvalidPlan { message: String, raw: String },
}

impl GenAiError {
    pub fn profile(message: impl Into<String>) -> Self {
        Self::Profile {
            message: message.into(),
        }
    }

    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn invalid_plan(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::InvalidPlan {
            message: message.into(),
            raw: raw.into(),
        }
    }
}
