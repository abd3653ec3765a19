//! Projected and cleaned table

use super::column::ColumnSpec;
use super::value::{CellValue, clean_value};

/// One output row, cells in `ColumnSpec` order
pub type Row = Vec<CellValue>;

/// A sheet re-indexed to exactly the columns of a `ColumnSpec`
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTable {
    columns: ColumnSpec,
    rows: Vec<Row>,
}

impl ExtractedTable {
    /// Project raw rows onto `spec` and clean every cell.
    ///
    /// `headers` names the source columns. Missing spec columns become all-null,
    /// extra source columns are dropped and short rows are padded with null.
    pub fn project<I>(spec: &ColumnSpec, headers: &[String], source_rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        let positions = spec.locate(headers);

        let rows = source_rows
            .into_iter()
            .map(|source| {
                positions
                    .iter()
                    .map(|pos| {
                        let cell = pos
                            .and_then(|idx| source.get(idx).cloned())
                            .unwrap_or(CellValue::Null);
                        clean_value(cell)
                    })
                    .collect()
            })
            .collect();

        Self {
            columns: spec.clone(),
            rows,
        }
    }

    /// A table with the spec's columns and no rows
    pub fn empty(spec: &ColumnSpec) -> Self {
        Self {
            columns: spec.clone(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &ColumnSpec {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `n` rows, for inspection
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Render the first `n` rows as tab-separated text for debug logging
    pub fn preview(&self, n: usize) -> String {
        let mut out = self.columns.names().join("\t");
        for (i, row) in self.head(n).iter().enumerate() {
            out.push('\n');
            out.push_str(&i.to_string());
            for cell in row {
                out.push('\t');
                out.push_str(&cell.to_string());
            }
        }
        out
    }
}
