//! REST helpers shared by module handlers.

pub mod error;
pub mod extract;
pub mod response;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use extract::{PathId, ValidJson, validation_message};
pub use response::{Envelope, EnvelopeResponse, accepted_json, created_json, ok_json};

/// Commonly used imports for handler modules.
pub mod prelude {
    pub use super::{
        ApiError, ApiResult, Envelope, EnvelopeResponse, PathId, ValidJson, accepted_json,
        created_json, ok_json,
    };
    pub use axum::Extension;
    pub use axum::http::StatusCode;
    pub use axum::response::IntoResponse;
}
