use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use business::domain::errors::RepositoryError;

/// A collection document as stored on disk.
pub trait Document: Serialize + Default {
    /// Builds the document from any syntactically valid JSON. Records that
    /// cannot be read are skipped, never the whole document.
    fn from_json(value: Value) -> Self;
}

/// Durable storage of a single JSON document.
///
/// Every save rewrites the whole file. Reads and writes of one store are
/// serialized by an in-process lock; nothing protects against other processes
/// or a crash halfway through a write.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Creates the parent directory when it does not exist yet.
    pub async fn ensure_container(&self) -> Result<(), RepositoryError> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        if dir.as_os_str().is_empty() {
            return Ok(());
        }
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| RepositoryError::directory(dir.display().to_string(), e))
    }

    /// Reads the document. A missing file, or one that is not valid JSON, is
    /// replaced by `D::default()`, which is written back before returning.
    pub async fn load<D: Document>(&self) -> Result<D, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.ensure_container().await?;

        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(value) => return Ok(D::from_json(value)),
                Err(err) => warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Corrupt collection file, resetting to empty"
                ),
            },
            Err(err) if err.kind() == ErrorKind::NotFound => debug!(
                path = %self.path.display(),
                "Collection file missing, creating it"
            ),
            Err(err) => warn!(
                path = %self.path.display(),
                error = %err,
                "Unreadable collection file, resetting to empty"
            ),
        }

        let document = D::default();
        self.write(&document).await?;
        Ok(document)
    }

    pub async fn save<D: Serialize>(&self, document: &D) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        self.write(document).await
    }

    // Caller holds the lock.
    async fn write<D: Serialize>(&self, document: &D) -> Result<(), RepositoryError> {
        self.ensure_container().await?;
        let json = serde_json::to_string_pretty(document).map_err(RepositoryError::serialization)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Failed to write collection file");
            RepositoryError::write(self.display_path(), e)
        })
    }
}
