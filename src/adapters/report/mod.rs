//! Report adapters - Turning a scored matrix into text for people.
//!
//! - `CsvResultWriter` - Result file in delimited text
//! - `HtmlTableRenderer` - Result table for display and mail bodies
//! - `ResultMessageComposer` - The mail sent with an analysis
//! - `ReportRenderer` - All three behind the `ResultRenderer` port

mod csv_writer;
mod html_table;
mod report_renderer;
mod result_message;

pub use csv_writer::CsvResultWriter;
pub use html_table::{escape_html, HtmlTableRenderer};
pub use report_renderer::ReportRenderer;
pub use result_message::{ResultMessageComposer, RESULT_ATTACHMENT_NAME, RESULT_SUBJECT};
