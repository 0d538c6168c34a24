//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where uploads and results are written
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    #[serde(default = "default_result_dir")]
    pub result_dir: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__UPLOAD_DIR"));
        }
        if self.result_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__RESULT_DIR"));
        }
        if self.upload_dir == self.result_dir {
            return Err(ValidationError::SharedStorageDirectory);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            result_dir: default_result_dir(),
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_result_dir() -> PathBuf {
    PathBuf::from("results")
}
