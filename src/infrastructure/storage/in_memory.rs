//! In-memory storage implementation

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

/// Thread-safe in-memory storage implementation
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<Vec<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    /// Creates storage pre-populated with entities, in the given order
    pub fn with_entities(entities: Vec<E>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn read_all(&self) -> Result<Vec<E>, DomainError> {
        let entities = self.entities.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entities.clone())
    }

    async fn write_all(&self, entities: &[E]) -> Result<(), DomainError> {
        let mut stored = self.entities.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *stored = entities.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntity {
        id: String,
        name: String,
        value: i32,
    }

    impl StorageEntity for TestEntity {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn entity(id: &str, name: &str, value: i32) -> TestEntity {
        TestEntity {
            id: id.to_string(),
            name: name.to_string(),
            value,
        }
    }

    #[tokio::test]
    async fn test_new_storage_is_empty() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        assert!(storage.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_preserves_order() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        let entities = vec![entity("b", "B", 2), entity("a", "A", 1), entity("c", "C", 3)];

        storage.write_all(&entities).await.unwrap();

        assert_eq!(storage.read_all().await.unwrap(), entities);
    }

    #[tokio::test]
    async fn test_write_replaces_collection() {
        let storage = InMemoryStorage::with_entities(vec![entity("1", "One", 1)]);

        storage.write_all(&[entity("2", "Two", 2)]).await.unwrap();

        let all = storage.read_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "2");
    }

    #[tokio::test]
    async fn test_find() {
        let storage = InMemoryStorage::with_entities(vec![
            entity("1", "One", 1),
            entity("2", "Two", 2),
        ]);

        let found = storage.find("2").await.unwrap();
        assert_eq!(found.unwrap().name, "Two");
        assert!(storage.find("3").await.unwrap().is_none());
    }
}
