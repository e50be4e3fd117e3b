//! Format-independent sheet grid.

/// A single cell of a sheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Empty,
}

impl CellValue {
    /// Whether the cell carries no usable content (empty, or
    /// whitespace-only text).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

const EMPTY: CellValue = CellValue::Empty;

/// One worksheet as a plain grid: a name, a header row, and data rows.
///
/// Rows may be ragged; cells past the end of a row read as
/// [`CellValue::Empty`]. Styling is a writer-side concern and is not
/// represented here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetTable {
    /// Worksheet name.
    pub name: String,
    /// Header row, as written in the sheet.
    pub headers: Vec<String>,
    /// Data rows, in sheet order, header excluded.
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Create an empty table with the given sheet name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Index of a header, matched case-insensitively after trimming.
    #[must_use]
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(header))
    }

    /// Cell at (data row, column); [`CellValue::Empty`] past a row's end.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY)
    }

    /// Append a data row.
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }
}
