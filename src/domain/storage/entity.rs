//! Storage entity trait

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be kept in a stored collection
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// Returns the entity's identifying key
    fn key(&self) -> &str;
}
