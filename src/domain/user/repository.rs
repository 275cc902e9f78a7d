//! User repository trait

use async_trait::async_trait;

use super::entity::UserRecord;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for the user profile collection
///
/// Every mutation is a full read-modify-write of the collection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All records in insertion order
    async fn list(&self) -> Result<Vec<UserRecord>, DomainError>;

    /// First record whose username matches exactly
    async fn find(&self, username: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Append a record unless its username is taken
    ///
    /// Returns `false` without writing when a record with the same username exists.
    async fn insert(&self, record: UserRecord) -> Result<bool, DomainError>;

    /// Replace the record stored under `username`, appending it if none exists
    ///
    /// Always returns `true`.
    async fn upsert(&self, username: &str, record: UserRecord) -> Result<bool, DomainError>;
}
