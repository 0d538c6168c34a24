//! Delimited Text Parser - Implementation of TableParser for CSV-style files.

use csv::{ReaderBuilder, StringRecord};

use crate::ports::{RawTable, TableError, TableParser};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses delimiter-separated text (CSV by default).
///
/// # Format
///
/// - First record is the header row; headers are trimmed
/// - `\n` and `\r\n` line endings, blank lines skipped
/// - Fields may be wrapped in `"`; inside quotes the delimiter and newlines
///   are literal and `""` is an escaped quote
/// - A leading UTF-8 byte order mark is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimitedTextParser {
    delimiter: u8,
}

impl DelimitedTextParser {
    /// Creates a parser splitting fields on the ASCII byte `delimiter`.
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Reads every non-blank record, each tagged with the line it starts on.
    fn records(&self, text: &str) -> Result<Vec<(usize, StringRecord)>, TableError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(table_error)?;
            let blank = record.len() == 1 && record[0].trim().is_empty();
            if !blank {
                records.push((record_line(&record), record));
            }
        }
        Ok(records)
    }
}

impl Default for DelimitedTextParser {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl TableParser for DelimitedTextParser {
    fn parse(&self, content: &[u8]) -> Result<RawTable, TableError> {
        let text =
            std::str::from_utf8(content).map_err(|e| TableError::Encoding(e.to_string()))?;
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        let mut records = self.records(text)?.into_iter();
        let (_, header) = records.next().ok_or(TableError::Empty)?;
        let headers: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();

        let rows = records
            .map(|(line, record)| {
                if record.len() == headers.len() {
                    Ok(record.iter().map(str::to_string).collect())
                } else {
                    Err(TableError::RaggedRow {
                        line,
                        expected: headers.len(),
                        actual: record.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RawTable::new(headers, rows))
    }
}

fn record_line(record: &StringRecord) -> usize {
    record
        .position()
        .map_or(0, |position| position.line() as usize)
}

fn table_error(error: csv::Error) -> TableError {
    if let csv::ErrorKind::Utf8 { err, .. } = error.kind() {
        return TableError::Encoding(err.to_string());
    }
    TableError::Malformed {
        line: error
            .position()
            .map_or(0, |position| position.line() as usize),
        reason: error.to_string(),
    }
}
