//! Table adapters - Implementations of the TableParser port.
//!
//! - `DelimitedTextParser` - CSV and other delimiter-separated text
//! - `SpreadsheetParser` - Excel and OpenDocument workbooks

mod delimited_text;
mod spreadsheet;

pub use delimited_text::DelimitedTextParser;
pub use spreadsheet::SpreadsheetParser;
