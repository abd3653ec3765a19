//! Staging directory for received uploads

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use super::UploadedFile;
use crate::error::AppError;

/// Create the staging directory if it doesn't exist yet
pub fn ensure_staging_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create upload directory: {}", dir.display()))?;
        info!("Created upload directory {}", dir.display());
    }
    Ok(())
}

/// Write an accepted upload into the staging directory.
///
/// A file with the same sanitized name is overwritten. Staged files are
/// never removed.
pub async fn stage_file(
    dir: &Path,
    original_name: &str,
    filename: &str,
    bytes: &[u8],
) -> Result<UploadedFile, AppError> {
    if filename.is_empty() {
        return Err(AppError::Storage(format!(
            "filename '{}' is empty after sanitizing",
            original_name
        )));
    }

    let path: PathBuf = dir.join(filename);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::Storage(format!("{}: {}", path.display(), e)))?;

    debug!("Staged {} bytes at {}", bytes.len(), path.display());

    Ok(UploadedFile {
        original_name: original_name.to_string(),
        filename: filename.to_string(),
        extension: super::filename::extension(filename).unwrap_or_default(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_staging_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("uploads");
        ensure_staging_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Second call is a no-op
        ensure_staging_dir(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_stage_file_writes_bytes() {
        let tmp = TempDir::new().unwrap();
        let staged = stage_file(tmp.path(), "My Report.XLSX", "My_Report.XLSX", b"abc")
            .await
            .unwrap();

        assert_eq!(staged.original_name, "My Report.XLSX");
        assert_eq!(staged.filename, "My_Report.XLSX");
        assert_eq!(staged.extension, "xlsx");
        assert_eq!(staged.path, tmp.path().join("My_Report.XLSX"));
        assert_eq!(std::fs::read(&staged.path).unwrap(), b"abc");
    }

    #[tokio::test]
    async fn test_stage_file_overwrites_same_name() {
        let tmp = TempDir::new().unwrap();
        stage_file(tmp.path(), "a.xlsx", "a.xlsx", b"first").await.unwrap();
        let staged = stage_file(tmp.path(), "a.xlsx", "a.xlsx", b"second").await.unwrap();
        assert_eq!(std::fs::read(&staged.path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_stage_file_rejects_empty_name() {
        let tmp = TempDir::new().unwrap();
        let err = stage_file(tmp.path(), "...xlsx", "", b"x").await.unwrap_err();
        assert_eq!(err.kind(), "storage");
    }

    #[tokio::test]
    async fn test_stage_file_missing_dir_is_storage_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = stage_file(&missing, "a.xlsx", "a.xlsx", b"x").await.unwrap_err();
        assert_eq!(err.kind(), "storage");
    }
}
