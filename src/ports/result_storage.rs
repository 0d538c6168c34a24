//! Result Storage Port - Keeping uploads and result files.
//!
//! The domain depends on this trait, while adapters (like
//! `LocalResultStorage`) provide the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Port for persisting submitted files and generated results.
///
/// # Contract
///
/// Implementations must:
/// - Never overwrite an earlier submission's files
/// - Write the full content or fail (no partial files left behind as results)
/// - Ignore any directory components in caller-supplied file names
#[async_trait]
pub trait ResultStorage: Send + Sync {
    /// Stores the uploaded input file as received.
    async fn store_upload(&self, file_name: &str, content: &[u8])
        -> Result<StoredFile, StorageError>;

    /// Stores the scored table serialized as CSV.
    async fn store_result(&self, csv: &str) -> Result<StoredFile, StorageError>;
}

/// A file written by a `ResultStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub stored_at: DateTime<Utc>,
}

impl StoredFile {
    /// Returns the file name without the directory.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
    }
}

/// Errors from storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl StorageError {
    pub fn io(message: impl Into<String>) -> Self {
        StorageError::Io(message.into())
    }
}
