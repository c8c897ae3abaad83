use thiserror::Error;
use uuid::Uuid;

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

    /// Rejected by image validation (type, size, path).
    #[error("{message}")]
    InvalidImage { message: String },

    #[error("image storage error: {message}")]
    ImageStorage { message: String },

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

    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            message: message.into(),
        }
    }

    pub fn image_storage(message: impl Into<String>) -> Self {
        Self::ImageStorage {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
