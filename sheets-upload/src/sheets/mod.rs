//! Remote sheet access
//!
//! Service-account authentication against Google's OAuth2 token endpoint,
//! spreadsheet lookup by id, first-worksheet selection and row appends over
//! the Sheets v4 REST API.

pub mod append;
pub mod auth;
pub mod client;
pub mod connector;
pub mod credentials;

#[cfg(test)]
pub(crate) mod testing;

pub use append::{RowSink, range_label};
pub use auth::{AccessToken, SCOPES, authorize};
pub use client::{SheetsClient, Spreadsheet, Worksheet, WorksheetProperties};
pub use connector::{GoogleSheetsConnector, SheetConnector};
pub use credentials::ServiceAccountKey;
