//! Application state for shared services

use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::UserRecord;
use crate::infrastructure::storage::InMemoryStorage;
use crate::infrastructure::user::{StorageUserRepository, UserService};

/// Application state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Build state around an explicit storage handle
    pub fn with_storage(storage: Arc<dyn Storage<UserRecord>>) -> Self {
        let repository = Arc::new(StorageUserRepository::new(storage));

        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }

    /// State backed by a fresh in-memory collection
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(InMemoryStorage::<UserRecord>::new()))
    }
}
