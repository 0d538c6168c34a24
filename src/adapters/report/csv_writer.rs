//! CSV Result Writer - Serializes a scored matrix back to delimited text.

use crate::domain::topsis::ScoredMatrix;

/// Writes a scored matrix as CSV: the input columns followed by
/// `Topsis Score` and `Rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvResultWriter {
    delimiter: char,
}

impl CsvResultWriter {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Renders the full table, one line per alternative, `\n` terminated.
    pub fn write(&self, scored: &ScoredMatrix) -> String {
        let mut out = String::new();
        self.push_record(&mut out, scored.headers().iter().map(String::as_str));

        for alternative in &scored.alternatives {
            let mut cells: Vec<String> = Vec::with_capacity(alternative.values.len() + 3);
            cells.push(alternative.label.clone());
            cells.extend(alternative.values.iter().map(|v| v.to_string()));
            cells.push(alternative.closeness.to_string());
            cells.push(alternative.rank.to_string());
            self.push_record(&mut out, cells.iter().map(String::as_str));
        }

        out
    }

    fn push_record<'a>(&self, out: &mut String, fields: impl Iterator<Item = &'a str>) {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }
            self.push_field(out, field);
        }
        out.push('\n');
    }

    fn push_field(&self, out: &mut String, field: &str) {
        let needs_quotes = field
            .chars()
            .any(|c| c == self.delimiter || c == '"' || c == '\n' || c == '\r');
        if needs_quotes {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
}

impl Default for CsvResultWriter {
    fn default() -> Self {
        Self::new(',')
    }
}
