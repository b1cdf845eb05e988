use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
};

use serde_json::Value;
use tokio::fs;
use tracing::{error, info};

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{entities::DiagnosisRecord, ports::DiagnosisRepository},
};

/// Diagnosis history kept as one pretty-printed JSON array on disk.
///
/// Entries are kept as plain JSON, so records written with other field
/// types stay readable. Every append reads the whole file and writes it back. Writers are not
/// serialized, so concurrent appends can lose records (last writer wins).
/// Each write goes through a temporary file and a rename, which keeps
/// readers from ever seeing a half-written array.
#[derive(Debug)]
pub struct FileDiagnosisRepository {
    path: PathBuf,
    write_sequence: AtomicU64,
}

impl FileDiagnosisRepository {
    /// Opens the collection at `path`, creating it as `[]` if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();

        let exists = fs::try_exists(&path).await.map_err(|e| {
            error!("Failed to inspect storage file {}: {}", path.display(), e);
            CoreError::StorageError(format!("Failed to inspect storage file: {}", e))
        })?;

        if !exists {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).await.map_err(|e| {
                    error!("Failed to create storage directory {}: {}", parent.display(), e);
                    CoreError::StorageError(format!("Failed to create storage directory: {}", e))
                })?;
            }

            fs::write(&path, "[]").await.map_err(|e| {
                error!("Failed to initialise storage file {}: {}", path.display(), e);
                CoreError::StorageError(format!("Failed to initialise storage file: {}", e))
            })?;
            info!("Initialised empty storage file at {}", path.display());
        }

        Ok(Self {
            path,
            write_sequence: AtomicU64::new(0),
        })
    }

    async fn write_all(&self, records: &[Value]) -> Result<(), CoreError> {
        let body = serde_json::to_string_pretty(records).map_err(|e| {
            error!("Failed to serialize diagnosis records: {}", e);
            CoreError::StorageError(format!("Failed to serialize diagnosis records: {}", e))
        })?;

        let sequence = self.write_sequence.fetch_add(1, Ordering::Relaxed);
        let mut temp_name = self.path.clone().into_os_string();
        temp_name.push(format!(".{}.{}.tmp", std::process::id(), sequence));
        let temp_path = PathBuf::from(temp_name);

        fs::write(&temp_path, body).await.map_err(|e| {
            error!("Failed to write storage file {}: {}", temp_path.display(), e);
            CoreError::StorageError(format!("Failed to write storage file: {}", e))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            error!("Failed to replace storage file {}: {}", self.path.display(), e);
            CoreError::StorageError(format!("Failed to replace storage file: {}", e))
        })
    }
}

impl DiagnosisRepository for FileDiagnosisRepository {
    async fn read_all(&self) -> Result<Vec<Value>, CoreError> {
        let data = fs::read_to_string(&self.path).await.map_err(|e| {
            error!("Failed to read storage file {}: {}", self.path.display(), e);
            CoreError::StorageError(format!("Failed to read storage file: {}", e))
        })?;

        serde_json::from_str(&data).map_err(|e| {
            error!("Storage file {} is not a valid record list: {}", self.path.display(), e);
            CoreError::StorageError(format!("Failed to parse storage file: {}", e))
        })
    }

    async fn append_and_save(&self, record: DiagnosisRecord) -> Result<DiagnosisRecord, CoreError> {
        let entry = serde_json::to_value(&record).map_err(|e| {
            error!("Failed to serialize diagnosis record: {}", e);
            CoreError::StorageError(format!("Failed to serialize diagnosis record: {}", e))
        })?;

        let mut records = self.read_all().await?;
        records.push(entry);
        self.write_all(&records).await?;

        Ok(record)
    }

    async fn clear(&self) -> Result<(), CoreError> {
        self.write_all(&[]).await
    }
}
