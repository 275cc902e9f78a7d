//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Storage for an ordered collection that is always read and written whole
///
/// Implementations must preserve insertion order between `write_all` and the
/// next `read_all`.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Returns the full collection, initializing an empty one if none exists yet
    async fn read_all(&self) -> Result<Vec<E>, DomainError>;

    /// Replaces the full collection
    async fn write_all(&self, entities: &[E]) -> Result<(), DomainError>;

    /// Returns the first entity whose key matches exactly
    async fn find(&self, key: &str) -> Result<Option<E>, DomainError> {
        Ok(self.read_all().await?.into_iter().find(|e| e.key() == key))
    }
}
