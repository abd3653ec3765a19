//! Resolve the configured target worksheet

use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::append::RowSink;
use super::auth::{SCOPES, authorize};
use super::client::SheetsClient;
use super::credentials::ServiceAccountKey;
use crate::config::Config;
use crate::error::AppError;

/// Produces the sink that uploaded rows are appended to
#[async_trait]
pub trait SheetConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn RowSink>, AppError>;
}

/// Authenticates with the service-account key from `Config` and selects the
/// first worksheet of the configured spreadsheet
#[derive(Debug, Clone)]
pub struct GoogleSheetsConnector {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl GoogleSheetsConnector {
    pub fn new(http: reqwest::Client, config: Arc<Config>) -> Self {
        Self { http, config }
    }

    /// Authenticate with `key` and return a client handle
    pub async fn client(&self, key: &ServiceAccountKey) -> Result<SheetsClient, AppError> {
        let token = authorize(&self.http, key, &SCOPES).await?;
        info!(
            "Authenticated as {} (token valid until {})",
            key.client_email, token.expires_at
        );
        Ok(SheetsClient::new(
            self.http.clone(),
            self.config.sheets_api_base.as_str(),
            token,
        ))
    }
}

#[async_trait]
impl SheetConnector for GoogleSheetsConnector {
    async fn connect(&self) -> Result<Box<dyn RowSink>, AppError> {
        let key = ServiceAccountKey::from_file(self.config.credentials_path.as_deref())?;
        let spreadsheet_id = self
            .config
            .spreadsheet_id
            .as_deref()
            .ok_or_else(|| AppError::Config("SPREADSHEET_ID is not set".to_string()))?;

        let client = self.client(&key).await?;
        let spreadsheet = client.open_by_key(spreadsheet_id).await?;
        let worksheet = spreadsheet.first_worksheet()?;
        Ok(Box::new(worksheet))
    }
}
