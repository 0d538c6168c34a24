//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `table` - Uploaded file parsing (delimited text, workbooks)
//! - `report` - CSV, HTML, and mail rendering of scored matrices
//! - `storage` - Local filesystem persistence of uploads and results
//! - `delivery` - Result mail (Resend API, in-memory)
//! - `http` - Axum router and handlers

pub mod delivery;
pub mod http;
pub mod report;
pub mod storage;
pub mod table;

pub use delivery::{InMemoryDelivery, ResendConfig, ResendDelivery};
pub use http::{app_router, HttpLimits, TopsisAppState};
pub use report::{CsvResultWriter, HtmlTableRenderer, ReportRenderer, ResultMessageComposer};
pub use storage::LocalResultStorage;
pub use table::{DelimitedTextParser, SpreadsheetParser};
