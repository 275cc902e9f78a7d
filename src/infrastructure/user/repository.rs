//! Storage-backed user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::storage::Storage;
use crate::domain::user::{UserRecord, UserRepository};
use crate::domain::DomainError;

/// Storage-backed implementation of UserRepository
///
/// Mutations hold a process-local lock across their read and write so that
/// concurrent requests in this process cannot lose each other's changes.
#[derive(Debug)]
pub struct StorageUserRepository {
    storage: Arc<dyn Storage<UserRecord>>,
    write_lock: Mutex<()>,
}

impl StorageUserRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<UserRecord>>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl UserRepository for StorageUserRepository {
    async fn list(&self) -> Result<Vec<UserRecord>, DomainError> {
        self.storage.read_all().await
    }

    async fn find(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        self.storage.find(username).await
    }

    async fn insert(&self, record: UserRecord) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.storage.read_all().await?;

        if users.iter().any(|u| u.username() == record.username()) {
            debug!(username = %record.username(), "Insert skipped, username exists");
            return Ok(false);
        }

        users.push(record);
        self.storage.write_all(&users).await?;

        Ok(true)
    }

    async fn upsert(&self, username: &str, record: UserRecord) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.storage.read_all().await?;

        match users.iter_mut().find(|u| u.username() == username) {
            Some(existing) => *existing = record,
            None => {
                debug!(username = %username, "Upsert of unknown username appends a new record");
                users.push(record);
            }
        }

        self.storage.write_all(&users).await?;

        Ok(true)
    }
}
