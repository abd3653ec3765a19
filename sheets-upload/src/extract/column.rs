//! Column projection spec

/// Columns extracted from every uploaded workbook, in output order
pub const DEFAULT_COLUMNS: [&str; 8] = ["CLIENTE", "ANO", "p4", "p6", "p13", "p14", "p54", "p164"];

/// Ordered list of column names to project a sheet onto
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    names: Vec<String>,
}

impl ColumnSpec {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// For each spec column, the index of the first matching header (if any).
    /// Matching is exact and case-sensitive.
    pub fn locate(&self, headers: &[String]) -> Vec<Option<usize>> {
        self.names
            .iter()
            .map(|name| headers.iter().position(|h| h == name))
            .collect()
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}
