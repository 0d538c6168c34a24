//! Table Parser Port - Uploaded file to raw rows and columns.
//!
//! The scorer never sees bytes; an adapter (like `DelimitedTextParser`)
//! turns the uploaded file into a `RawTable` of string cells first.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Port for reading an uploaded tabular file.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first record as the header row
/// - Return every data row with exactly as many cells as the header
/// - Leave cell contents untouched apart from unquoting (numeric parsing is
///   the domain's job)
pub trait TableParser: Send + Sync {
    /// Parses raw file content into a header row and data rows.
    fn parse(&self, content: &[u8]) -> Result<RawTable, TableError>;
}

/// File extensions read as workbooks rather than delimited text.
const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Layout of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Delimited,
    Spreadsheet,
}

impl TableFormat {
    /// Chooses the format from the file extension, ignoring case.
    ///
    /// Unknown or missing extensions fall back to delimited text.
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension {
            Some(ext) if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) => Self::Spreadsheet,
            _ => Self::Delimited,
        }
    }
}

/// One parser per accepted upload format.
#[derive(Clone)]
pub struct TableParsers {
    delimited: Arc<dyn TableParser>,
    spreadsheet: Arc<dyn TableParser>,
}

impl TableParsers {
    pub fn new(delimited: Arc<dyn TableParser>, spreadsheet: Arc<dyn TableParser>) -> Self {
        Self {
            delimited,
            spreadsheet,
        }
    }

    pub fn for_format(&self, format: TableFormat) -> &dyn TableParser {
        match format {
            TableFormat::Delimited => self.delimited.as_ref(),
            TableFormat::Spreadsheet => self.spreadsheet.as_ref(),
        }
    }

    /// Returns the parser for an uploaded file, chosen by its name.
    pub fn for_file(&self, file_name: &str) -> &dyn TableParser {
        self.for_format(TableFormat::from_file_name(file_name))
    }
}

/// Header plus rows of string cells, as read from the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Returns the number of columns, label column included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Errors from table parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("File contains no rows")]
    Empty,

    #[error("File is not valid UTF-8 text: {0}")]
    Encoding(String),

    #[error("Could not read spreadsheet: {0}")]
    Workbook(String),

    #[error("Malformed table at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Line {line} has {actual} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },
}
