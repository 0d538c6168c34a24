//! Spreadsheet Parser - Implementation of TableParser for workbook uploads.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use crate::ports::{RawTable, TableError, TableParser};

/// Reads the first worksheet of an Excel or OpenDocument workbook.
///
/// The first non-empty row is the header row; headers are trimmed. Fully
/// empty rows are skipped. Numbers keep their shortest decimal form so the
/// domain parses them like typed text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetParser;

impl SpreadsheetParser {
    pub fn new() -> Self {
        Self
    }
}

impl TableParser for SpreadsheetParser {
    fn parse(&self, content: &[u8]) -> Result<RawTable, TableError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(content.to_vec()))
            .map_err(|e| TableError::Workbook(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(TableError::Empty)?
            .map_err(|e| TableError::Workbook(e.to_string()))?;

        table_from_range(&range)
    }
}

fn table_from_range(range: &Range<Data>) -> Result<RawTable, TableError> {
    let mut rows = range
        .rows()
        .filter(|row| !row.iter().all(|cell| matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(cell_text).collect::<Vec<_>>());

    let headers: Vec<String> = rows
        .next()
        .ok_or(TableError::Empty)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    Ok(RawTable::new(headers, rows.collect()))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
