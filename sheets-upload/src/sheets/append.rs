//! Appending rows to a worksheet

use async_trait::async_trait;
use log::{debug, info};
use serde_json::json;

use super::client::{Worksheet, api_error_message};
use crate::error::AppError;
use crate::extract::Row;

/// An append-only destination for extracted rows
#[async_trait]
pub trait RowSink: Send + Sync {
    /// Human-readable name of the destination, for logs
    fn label(&self) -> String;

    /// Append rows at the end of the sink, in order.
    ///
    /// Returns the number of rows appended. On failure, rows before the
    /// failing one stay appended.
    async fn append_rows(&self, rows: &[Row]) -> Result<usize, AppError>;
}

/// A1 range naming the whole worksheet: the title in single quotes, with
/// embedded quotes doubled
pub fn range_label(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

impl Worksheet {
    /// Append a single row after the last row of the worksheet's table
    pub async fn append_row(&self, row: &Row) -> Result<(), AppError> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}:append",
            self.client.base_url(),
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(&range_label(self.title()))
        );
        let values: Vec<serde_json::Value> = row.iter().map(|cell| cell.to_json()).collect();

        let response = self
            .client
            .post(&url)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": [values] }))
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("append request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::RemoteWrite(api_error_message(status, &body)));
        }
        Ok(())
    }
}

#[async_trait]
impl RowSink for Worksheet {
    fn label(&self) -> String {
        format!("{}/{}", self.spreadsheet_id, self.title())
    }

    /// One API call per row, no batching
    async fn append_rows(&self, rows: &[Row]) -> Result<usize, AppError> {
        for (i, row) in rows.iter().enumerate() {
            self.append_row(row).await.map_err(|e| match e {
                AppError::RemoteWrite(msg) => AppError::RemoteWrite(format!(
                    "row {} of {} failed after {} appended: {}",
                    i + 1,
                    rows.len(),
                    i,
                    msg
                )),
                other => other,
            })?;
            debug!("Appended row {}/{} to {}", i + 1, rows.len(), self.label());
        }
        info!("Appended {} rows to {}", rows.len(), self.label());
        Ok(rows.len())
    }
}
