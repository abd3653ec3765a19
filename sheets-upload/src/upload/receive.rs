//! Pull the `file` part out of a multipart request and validate it

use axum::extract::Multipart;
use log::{debug, warn};

use super::filename::{allowed_file, secure_filename};
use crate::error::{AppError, ValidationError};

/// Name of the multipart field carrying the workbook
pub const FILE_FIELD: &str = "file";

/// A validated upload, read fully into memory but not yet staged
#[derive(Debug, Clone)]
pub struct FilePart {
    pub original_name: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Check a client filename against the validation gates, returning the
/// sanitized name on success.
///
/// `None` means the `file` part was missing or had no filename parameter.
pub fn validate_filename(name: Option<&str>) -> Result<String, ValidationError> {
    let name = name.ok_or(ValidationError::NoFilePart)?;
    if name.is_empty() {
        return Err(ValidationError::NoSelectedFile);
    }
    if !allowed_file(name) {
        return Err(ValidationError::NotAllowed);
    }
    Ok(secure_filename(name))
}

/// Find the first `file` part that carries a filename and read it.
///
/// Parts with other names, and `file` parts sent as plain form fields, are
/// skipped. The body is only read once the filename has passed validation.
pub async fn receive_file(multipart: &mut Multipart) -> Result<FilePart, AppError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart body: {}", e);
                break;
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(original_name) = field.file_name().map(str::to_string) else {
            debug!("Skipping '{}' part without a filename", FILE_FIELD);
            continue;
        };

        let filename = validate_filename(Some(&original_name))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Storage(format!("failed to read upload body: {}", e)))?;

        return Ok(FilePart {
            original_name,
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(ValidationError::NoFilePart.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_filename_gates() {
        assert_eq!(validate_filename(None), Err(ValidationError::NoFilePart));
        assert_eq!(validate_filename(Some("")), Err(ValidationError::NoSelectedFile));
        assert_eq!(validate_filename(Some("report.csv")), Err(ValidationError::NotAllowed));
        assert_eq!(validate_filename(Some("report")), Err(ValidationError::NotAllowed));
    }

    #[test]
    fn test_validate_filename_returns_sanitized() {
        assert_eq!(validate_filename(Some("report.xlsx")).unwrap(), "report.xlsx");
        assert_eq!(
            validate_filename(Some("../Relatório 2023.XLS")).unwrap(),
            "Relatorio_2023.XLS"
        );
    }
}
