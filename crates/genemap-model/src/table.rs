use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Number of rows shown when previewing an input file.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Field separator of a delimited text file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    #[default]
    Tab,
}

impl Delimiter {
    /// Infer the delimiter from a file extension: `.csv` is comma, everything else is tab.
    pub fn for_path(path: &Path) -> Self {
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv { Self::Comma } else { Self::Tab }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Comma => b',',
            Self::Tab => b'\t',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Tab => "tab",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Delimiter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comma" | "," | "csv" => Ok(Self::Comma),
            "tab" | "\\t" | "\t" | "tsv" => Ok(Self::Tab),
            _ => Err(ModelError::UnknownDelimiter(s.to_string())),
        }
    }
}

/// A user-supplied table: header row plus data rows, all cells kept as text.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub delimiter: Delimiter,
    pub source: PathBuf,
}

impl InputTable {
    /// Build a table, padding or truncating rows to the header width.
    pub fn new(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        delimiter: Delimiter,
        source: impl Into<PathBuf>,
    ) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self {
            headers,
            rows,
            delimiter,
            source: source.into(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// First `n` data rows.
    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index of the first header equal to `name` (case-sensitive).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }
}

/// How the caller picks the column to convert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnSelector {
    /// Zero-based column position.
    ByIndex(usize),
    /// Exact header text.
    ByName(String),
}

impl ColumnSelector {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    /// Resolve against a header row.
    pub fn resolve(&self, headers: &[String]) -> Option<usize> {
        match self {
            Self::ByIndex(index) => (*index < headers.len()).then_some(*index),
            Self::ByName(name) => headers.iter().position(|header| header == name),
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByIndex(index) => write!(f, "#{index}"),
            Self::ByName(name) => write!(f, "'{name}'"),
        }
    }
}

impl From<usize> for ColumnSelector {
    fn from(index: usize) -> Self {
        Self::ByIndex(index)
    }
}

impl From<&str> for ColumnSelector {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_string())
    }
}

impl From<String> for ColumnSelector {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}
