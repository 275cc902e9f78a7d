//! Profile Registry
//!
//! A small web service for registering and editing user profiles that are
//! stored together in a single JSON file:
//! - Field validation shared by registration and update
//! - Whole-collection read-modify-write storage
//! - JSON HTTP API built on axum

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use domain::UserRecord;
use infrastructure::storage::{StorageConfig, StorageFactory};
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage.to_storage_config()?;

    match &storage_config {
        StorageConfig::File(path) => info!(path = %path.display(), "Using JSON file storage"),
        StorageConfig::InMemory => info!("Using in-memory storage"),
    }

    let storage = StorageFactory::create::<UserRecord>(&storage_config);

    Ok(AppState::with_storage(storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageSettings;

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let config = AppConfig {
            storage: StorageSettings {
                backend: "memory".to_string(),
                path: String::new(),
            },
            ..AppConfig::default()
        };

        let state = create_app_state_with_config(&config).unwrap();
        assert!(state.user_service.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_create_app_state_unknown_backend() {
        let config = AppConfig {
            storage: StorageSettings {
                backend: "redis".to_string(),
                path: String::new(),
            },
            ..AppConfig::default()
        };

        assert!(create_app_state_with_config(&config).is_err());
    }
}
