//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TableParser` - Uploaded file to raw header and rows
//! - `ResultRenderer` - Scored matrix to result file, table and mail
//! - `ResultStorage` - Persisting uploads and result files
//! - `ResultDelivery` - Sending the finished analysis to the requester

mod result_delivery;
mod result_renderer;
mod result_storage;
mod table_parser;

pub use result_delivery::{Attachment, DeliveryError, ResultDelivery, ResultMessage};
pub use result_renderer::{AnalysisParameters, RenderedResult, ResultRenderer};
pub use result_storage::{ResultStorage, StorageError, StoredFile};
pub use table_parser::{RawTable, TableError, TableFormat, TableParser, TableParsers};
