//! Process-wide configuration
//!
//! Built once at startup from the environment (after `.env` is loaded) and
//! optionally overridden by command-line flags, then shared read-only with
//! request handlers.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const ENV_CREDENTIALS_PATH: &str = "GOOGLE_CREDENTIALS_PATH";
pub const ENV_SPREADSHEET_ID: &str = "SPREADSHEET_ID";
pub const ENV_UPLOAD_FOLDER: &str = "UPLOAD_FOLDER";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";
pub const ENV_SHEETS_API_BASE: &str = "SHEETS_API_BASE";

pub const DEFAULT_UPLOAD_FOLDER: &str = "uploads";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

/// Runtime configuration for the upload service
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the service-account JSON key. Checked per request, not at startup.
    pub credentials_path: Option<PathBuf>,
    /// Target spreadsheet identifier. Checked per request, not at startup.
    pub spreadsheet_id: Option<String>,
    /// Staging directory for uploaded files (absolute once resolved)
    pub upload_dir: PathBuf,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Request body limit for `POST /upload`
    pub max_upload_bytes: usize,
    /// Base URL of the Sheets v4 REST API
    pub sheets_api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_path: None,
            spreadsheet_id: None,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_FOLDER),
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 5000))),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            sheets_api_base: DEFAULT_SHEETS_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        config.credentials_path = get(ENV_CREDENTIALS_PATH).map(PathBuf::from);
        config.spreadsheet_id = get(ENV_SPREADSHEET_ID).map(|s| s.trim().to_string());

        if let Some(dir) = get(ENV_UPLOAD_FOLDER) {
            config.upload_dir = PathBuf::from(dir);
        }

        if let Some(addr) = get(ENV_BIND_ADDR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_BIND_ADDR, addr))?;
        }

        if let Some(limit) = get(ENV_MAX_UPLOAD_BYTES) {
            config.max_upload_bytes = limit
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {}", ENV_MAX_UPLOAD_BYTES, limit))?;
        }

        if let Some(base) = get(ENV_SHEETS_API_BASE) {
            config.sheets_api_base = base.trim().trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    /// Resolve `upload_dir` against the current working directory
    pub fn resolve_upload_dir(&mut self) -> Result<()> {
        if self.upload_dir.is_relative() {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            self.upload_dir = cwd.join(&self.upload_dir);
        }
        Ok(())
    }
}
