use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("invalid file type")]
    InvalidFileType,

    #[error("file size exceeds 10MB")]
    FileTooLarge,

    #[error("invalid object path")]
    InvalidPath,

    #[error("missing file field")]
    MissingFile,

    #[error("storage error: {message}")]
    Storage { message: String },
}

impl UploadError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
