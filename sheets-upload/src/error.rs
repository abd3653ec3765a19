//! Error kinds for the upload pipeline
//!
//! Every gate in the pipeline either proceeds or fails with one of these.
//! Validation failures carry fixed user-facing messages; everything else is
//! reported as `Ocorreu um erro: {description}`.

use thiserror::Error;

/// Rejections raised before anything touches the disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The multipart body has no `file` part
    #[error("No file part")]
    NoFilePart,
    /// The `file` part was sent with an empty filename
    #[error("No selected file")]
    NoSelectedFile,
    /// The filename extension is not `xlsx` or `xls`
    #[error("Arquivo não permitido")]
    NotAllowed,
}

/// Any failure in the upload pipeline
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The staged file could not be read as a workbook
    #[error("failed to parse workbook: {0}")]
    Parse(String),

    /// Credentials are missing, malformed, or were rejected by the token endpoint
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A setting the pipeline needs is not configured
    #[error("configuration error: {0}")]
    Config(String),

    /// The spreadsheet id does not resolve to an accessible spreadsheet
    #[error("spreadsheet not found: {0}")]
    RemoteNotFound(String),

    /// The remote API failed while reading metadata or appending rows
    #[error("remote sheet error: {0}")]
    RemoteWrite(String),

    /// Writing the upload to the staging directory failed
    #[error("failed to store upload: {0}")]
    Storage(String),
}

impl AppError {
    /// Short, stable name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Parse(_) => "parse",
            AppError::Auth(_) => "auth",
            AppError::Config(_) => "config",
            AppError::RemoteNotFound(_) => "remote_not_found",
            AppError::RemoteWrite(_) => "remote_write",
            AppError::Storage(_) => "storage",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
