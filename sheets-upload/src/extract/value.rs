//! Cell value representation and cleaning

use calamine::Data;
use serde_json::json;

/// A single cell of an extracted table
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing or invalid value
    Null,
    /// Numeric cell (integers are widened to f64)
    Number(f64),
    /// Text cell, including the empty string
    Text(String),
    /// Boolean cell
    Bool(bool),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Convert to JSON for the Sheets API.
    /// Whole numbers are sent as integers so `2023` doesn't become `2023.0`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Number(n) if !n.is_finite() => serde_json::Value::Null,
            CellValue::Number(n) => {
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                    json!(*n as i64)
                } else {
                    json!(*n)
                }
            }
            CellValue::Text(s) => serde_json::Value::String(s.clone()),
            CellValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Null,
            // Formula errors (#N/A, #DIV/0!) read as missing
            Data::Error(_) => CellValue::Null,
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            // Serials outside chrono's range read as missing
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => CellValue::Text(naive.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => CellValue::Null,
            },
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "None"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}

/// Replace missing, NaN and infinite values with `Null`.
/// Everything else, including `0`, negatives and empty strings, passes through.
pub fn clean_value(value: CellValue) -> CellValue {
    match value {
        CellValue::Number(n) if !n.is_finite() => CellValue::Null,
        other => other,
    }
}
