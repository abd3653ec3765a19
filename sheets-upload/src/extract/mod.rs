//! Tabular extraction from uploaded workbooks
//!
//! Loads the first worksheet of an xlsx/xls file, projects it onto a fixed
//! ordered set of columns and scrubs non-finite numbers to null.

mod column;
mod reader;
mod table;
mod value;

pub use column::{ColumnSpec, DEFAULT_COLUMNS};
pub use reader::{RawSheet, load_table, read_workbook};
pub use table::{ExtractedTable, Row};
pub use value::{CellValue, clean_value};
