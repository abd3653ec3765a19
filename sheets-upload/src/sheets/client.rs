//! Google Sheets v4 REST client

use log::{debug, info};
use reqwest::StatusCode;
use serde::Deserialize;

use super::auth::AccessToken;
use crate::error::AppError;

const SPREADSHEET_FIELDS: &str = "spreadsheetId,properties.title,sheets.properties";

/// Authenticated handle to the Sheets API
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    token: AccessToken,
}

/// Properties of one worksheet (tab)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetProperties {
    pub sheet_id: i64,
    pub title: String,
    #[serde(default)]
    pub index: i64,
}

/// An opened spreadsheet and its worksheet metadata
#[derive(Debug, Clone)]
pub struct Spreadsheet {
    client: SheetsClient,
    pub id: String,
    pub title: String,
    pub worksheets: Vec<WorksheetProperties>,
}

/// A single worksheet, the sink rows are appended to
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub(crate) client: SheetsClient,
    pub spreadsheet_id: String,
    pub properties: WorksheetProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpreadsheetResponse {
    spreadsheet_id: String,
    #[serde(default)]
    properties: Option<SpreadsheetProperties>,
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetProperties {
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: WorksheetProperties,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Pull a readable message out of a Google API error body
pub(crate) fn api_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(kind) => format!("{} {}: {}", status.as_u16(), kind, parsed.error.message),
            None => format!("{}: {}", status.as_u16(), parsed.error.message),
        },
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{}: {}", status.as_u16(), body.trim()),
    }
}

impl SheetsClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, token: AccessToken) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.http.post(url).bearer_auth(&self.token.token)
    }

    /// Open a spreadsheet by its identifier and load its worksheet list
    pub async fn open_by_key(&self, spreadsheet_id: &str) -> Result<Spreadsheet, AppError> {
        let url = format!(
            "{}/spreadsheets/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        );
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token.token)
            .query(&[("fields", SPREADSHEET_FIELDS)])
            .send()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::RemoteWrite(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = api_error_message(status, &body);
            return Err(match status {
                StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => {
                    AppError::RemoteNotFound(format!("{} ({})", spreadsheet_id, message))
                }
                StatusCode::UNAUTHORIZED => AppError::Auth(message),
                _ => AppError::RemoteWrite(message),
            });
        }

        let parsed: SpreadsheetResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::RemoteWrite(format!("invalid spreadsheet metadata: {}", e)))?;

        let spreadsheet = Spreadsheet {
            client: self.clone(),
            id: parsed.spreadsheet_id,
            title: parsed.properties.map(|p| p.title).unwrap_or_default(),
            worksheets: parsed.sheets.into_iter().map(|s| s.properties).collect(),
        };

        info!(
            "Opened spreadsheet '{}' ({} worksheets)",
            spreadsheet.title,
            spreadsheet.worksheets.len()
        );
        Ok(spreadsheet)
    }
}

impl Spreadsheet {
    /// The worksheet at position 0, regardless of its title
    pub fn first_worksheet(&self) -> Result<Worksheet, AppError> {
        let properties = self
            .worksheets
            .iter()
            .min_by_key(|ws| ws.index)
            .cloned()
            .ok_or_else(|| {
                AppError::RemoteNotFound(format!("spreadsheet {} has no worksheets", self.id))
            })?;

        Ok(Worksheet {
            client: self.client.clone(),
            spreadsheet_id: self.id.clone(),
            properties,
        })
    }
}

impl Worksheet {
    pub fn title(&self) -> &str {
        &self.properties.title
    }
}
