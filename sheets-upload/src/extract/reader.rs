//! Read the first worksheet of an Excel file

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use log::debug;

use super::column::ColumnSpec;
use super::table::ExtractedTable;
use super::value::CellValue;
use crate::error::AppError;

/// Raw contents of the first worksheet: header names and data rows
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Load the first worksheet of an xlsx/xls file.
/// The first row is taken as the header; every following row is data.
///
/// The format is detected from the file contents, so a legacy `.xls`
/// saved with an `.xlsx` name (or the reverse) still loads.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<RawSheet, AppError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::Parse(format!("cannot read {}: {}", path.display(), e)))?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::Parse(format!("{}: {}", path.display(), e)))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| AppError::Parse(format!("{}: {}", path.display(), e)))?,
        None => {
            debug!("Workbook {} has no sheets", path.display());
            return Ok(RawSheet::default());
        }
    };

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(header_name).collect(),
        None => return Ok(RawSheet::default()),
    };

    let rows = rows
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    Ok(RawSheet { headers, rows })
}

/// Load a workbook and project it onto `spec`
pub fn load_table<P: AsRef<Path>>(path: P, spec: &ColumnSpec) -> Result<ExtractedTable, AppError> {
    let raw = read_workbook(path)?;
    if raw.headers.is_empty() {
        return Ok(ExtractedTable::empty(spec));
    }
    Ok(ExtractedTable::project(spec, &raw.headers, raw.rows))
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
