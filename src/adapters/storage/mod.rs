//! Storage adapters - Implementations of the ResultStorage port.
//!
//! - `LocalResultStorage` - Uploads and results on the local filesystem

mod local_result_storage;

pub use local_result_storage::LocalResultStorage;
