//! Upload Excel workbooks through a web form and append a fixed set of
//! columns to the first worksheet of a Google spreadsheet.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod server;
pub mod sheets;
pub mod upload;

pub use config::Config;
pub use error::{AppError, ValidationError};
