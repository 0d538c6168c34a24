//! Local Filesystem Storage Adapter - Implementation of ResultStorage.
//!
//! Keeps uploads and result files in two configured directories.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::ports::{ResultStorage, StorageError, StoredFile};

/// Local filesystem storage for submissions.
///
/// # Directory Structure
///
/// ```text
/// {upload_dir}/{uuid}_{original_name}
/// {result_dir}/{uuid}_result.csv
/// ```
///
/// # Atomic Writes
///
/// Content goes to `{name}.tmp`, is synced, then renamed into place, so a
/// crash never leaves a half-written file under the final name. A failed
/// write removes its temp file.
#[derive(Debug, Clone)]
pub struct LocalResultStorage {
    upload_dir: PathBuf,
    result_dir: PathBuf,
}

impl LocalResultStorage {
    pub fn new(upload_dir: impl Into<PathBuf>, result_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            result_dir: result_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn result_dir(&self) -> &Path {
        &self.result_dir
    }

    /// Reduces a client-supplied name to its final path component.
    fn sanitize_file_name(file_name: &str) -> Result<String, StorageError> {
        let name = file_name
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or_default()
            .trim();

        if name.is_empty() || name == "." || name == ".." {
            return Err(StorageError::InvalidFileName(file_name.to_string()));
        }
        Ok(name.to_string())
    }

    async fn write_atomic(
        dir: &Path,
        name: &str,
        content: &[u8],
    ) -> Result<StoredFile, StorageError> {
        fs::create_dir_all(dir).await.map_err(|e| {
            StorageError::io(format!("Failed to create directory {}: {}", dir.display(), e))
        })?;

        let path = dir.join(name);
        let temp_path = dir.join(format!("{}.tmp", name));

        if let Err(e) = Self::write_and_rename(&temp_path, &path, content).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        Ok(StoredFile {
            path,
            size_bytes: content.len() as u64,
            stored_at: Utc::now(),
        })
    }

    async fn write_and_rename(
        temp_path: &Path,
        path: &Path,
        content: &[u8],
    ) -> Result<(), StorageError> {
        let mut file = fs::File::create(temp_path).await.map_err(|e| {
            StorageError::io(format!("Failed to create {}: {}", temp_path.display(), e))
        })?;
        file.write_all(content).await.map_err(|e| {
            StorageError::io(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
        file.sync_all().await.map_err(|e| {
            StorageError::io(format!("Failed to sync {}: {}", temp_path.display(), e))
        })?;
        drop(file);

        fs::rename(temp_path, path).await.map_err(|e| {
            StorageError::io(format!("Failed to move {} into place: {}", path.display(), e))
        })
    }
}

#[async_trait]
impl ResultStorage for LocalResultStorage {
    async fn store_upload(
        &self,
        file_name: &str,
        content: &[u8],
    ) -> Result<StoredFile, StorageError> {
        let name = Self::sanitize_file_name(file_name)?;
        let unique = format!("{}_{}", Uuid::new_v4(), name);
        Self::write_atomic(&self.upload_dir, &unique, content).await
    }

    async fn store_result(&self, csv: &str) -> Result<StoredFile, StorageError> {
        let unique = format!("{}_result.csv", Uuid::new_v4());
        Self::write_atomic(&self.result_dir, &unique, csv.as_bytes()).await
    }
}
