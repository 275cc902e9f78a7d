//! Storage factory for runtime storage selection

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::storage::{Storage, StorageEntity};

use super::in_memory::InMemoryStorage;
use super::json_file::JsonFileStorage;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// JSON file storage
    File,
    /// In-memory storage (for testing/development)
    InMemory,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "file" | "json" | "json-file" | "json_file" => Some(Self::File),
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// JSON file at the given path
    File(PathBuf),
    /// In-memory storage configuration
    InMemory,
}

impl StorageConfig {
    /// Creates a JSON file storage configuration
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates a storage instance based on the configuration
    pub fn create<E>(config: &StorageConfig) -> Arc<dyn Storage<E>>
    where
        E: StorageEntity + 'static,
    {
        match config {
            StorageConfig::File(path) => Arc::new(JsonFileStorage::<E>::new(path.clone())),
            StorageConfig::InMemory => Arc::new(InMemoryStorage::<E>::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRecord;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(StorageType::from_str("file"), Some(StorageType::File));
        assert_eq!(StorageType::from_str("JSON"), Some(StorageType::File));
        assert_eq!(StorageType::from_str("memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("in-memory"), Some(StorageType::InMemory));
        assert_eq!(StorageType::from_str("postgres"), None);
    }

    #[test]
    fn test_storage_config_constructors() {
        assert_eq!(StorageConfig::in_memory(), StorageConfig::InMemory);
        assert_eq!(
            StorageConfig::file("users.json"),
            StorageConfig::File(PathBuf::from("users.json"))
        );
    }

    #[tokio::test]
    async fn test_create_in_memory() {
        let storage = StorageFactory::create::<UserRecord>(&StorageConfig::in_memory());
        assert!(storage.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let storage = StorageFactory::create::<UserRecord>(&StorageConfig::file(&path));

        assert!(storage.read_all().await.unwrap().is_empty());
        assert!(path.exists());
    }
}
