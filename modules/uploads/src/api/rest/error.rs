use grocer_kit::api::ApiError;
use tracing::error;

use crate::domain::error::UploadError;

impl From<UploadError> for ApiError {
    fn from(e: UploadError) -> Self {
        match e {
            UploadError::InvalidFileType
            | UploadError::FileTooLarge
            | UploadError::InvalidPath
            | UploadError::MissingFile => ApiError::bad_request(e.to_string()),
            UploadError::Storage { message } => {
                error!(%message, "object storage failure");
                ApiError::new(
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "storage error",
                )
            }
        }
    }
}
