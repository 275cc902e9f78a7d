//! JSON file storage implementation
//!
//! The whole collection lives in one file as a pretty-printed JSON array.
//! Every write replaces the file by writing a sibling temp file and renaming
//! it over the original. Writes from one handle, including the one that
//! creates a missing file, are serialized.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

/// File-backed storage holding the full collection as a JSON array
#[derive(Debug)]
pub struct JsonFileStorage<E>
where
    E: StorageEntity,
{
    path: PathBuf,
    write_lock: Mutex<()>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> JsonFileStorage<E>
where
    E: StorageEntity,
{
    /// Creates a storage handle for the given file; nothing is touched on disk yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Caller must hold `write_lock`
    async fn write_file(&self, entities: &[E]) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(entities)
            .map_err(|e| DomainError::storage(format!("Failed to serialize collection: {}", e)))?;

        let temp_path = self.temp_path();

        fs::write(&temp_path, content).await.map_err(|e| {
            DomainError::storage(format!("Failed to write '{}': {}", temp_path.display(), e))
        })?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            DomainError::storage(format!(
                "Failed to replace '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), count = entities.len(), "Wrote collection");
        Ok(())
    }

    /// Reads the file, `None` when it does not exist
    async fn read_file(&self) -> Result<Option<Vec<E>>, DomainError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&content).map(Some).map_err(|e| {
            DomainError::storage(format!(
                "Failed to parse '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Creates the file as an empty collection unless another write got there first
    async fn initialize(&self) -> Result<Vec<E>, DomainError> {
        let _guard = self.write_lock.lock().await;

        if let Some(entities) = self.read_file().await? {
            return Ok(entities);
        }

        info!(path = %self.path.display(), "Initializing empty collection file");
        self.write_file(&[]).await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl<E> Storage<E> for JsonFileStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn read_all(&self) -> Result<Vec<E>, DomainError> {
        match self.read_file().await? {
            Some(entities) => Ok(entities),
            None => self.initialize().await,
        }
    }

    async fn write_all(&self, entities: &[E]) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        self.write_file(entities).await
    }
}
