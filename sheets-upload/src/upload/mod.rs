//! Upload receiving: multipart parsing, filename validation and staging

mod filename;
mod receive;
mod staging;

use std::path::PathBuf;

pub use filename::{ALLOWED_EXTENSIONS, allowed_file, extension, secure_filename};
pub use receive::{FILE_FIELD, FilePart, receive_file, validate_filename};
pub use staging::{ensure_staging_dir, stage_file};

/// An upload written to the staging directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename as sent by the client
    pub original_name: String,
    /// Sanitized filename used on disk
    pub filename: String,
    /// Lowercased extension (`xlsx` or `xls`)
    pub extension: String,
    /// Full path of the staged file
    pub path: PathBuf,
}
