//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::extract::ColumnSpec;
use crate::sheets::{GoogleSheetsConnector, SheetConnector};

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub columns: ColumnSpec,
    pub connector: Arc<dyn SheetConnector>,
}

impl AppState {
    /// State wired to the real Google Sheets API
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let connector = GoogleSheetsConnector::new(reqwest::Client::new(), config.clone());
        Self {
            config,
            columns: ColumnSpec::default(),
            connector: Arc::new(connector),
        }
    }

    /// State with a custom sheet connector
    pub fn with_connector(config: Config, connector: Arc<dyn SheetConnector>) -> Self {
        Self {
            config: Arc::new(config),
            columns: ColumnSpec::default(),
            connector,
        }
    }
}
