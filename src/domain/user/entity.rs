//! User profile record and raw form input

use serde::{Deserialize, Serialize};

use crate::domain::storage::StorageEntity;

/// A stored user profile
///
/// Serialized with exactly the keys `username`, `full_name`, `email`, `age`
/// and `about`. An absent age is written as `null`.
///
/// Stored ages are taken as they are; the 0..=150 bound applies to form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    username: String,
    full_name: String,
    email: String,
    #[serde(default)]
    age: Option<i64>,
    #[serde(default)]
    about: String,
}

impl UserRecord {
    /// Create a record from already-normalized values
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        age: Option<i64>,
        about: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            full_name: full_name.into(),
            email: email.into(),
            age,
            about: about.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> Option<i64> {
        self.age
    }

    pub fn about(&self) -> &str {
        &self.about
    }

    /// Same profile fields under a different username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }
}

impl StorageEntity for UserRecord {
    fn key(&self) -> &str {
        &self.username
    }
}

/// Raw, untrimmed field values as submitted by a client
///
/// Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfileInput {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub age: String,
    pub about: String,
}

impl UserProfileInput {
    /// Prefill input from an existing record, e.g. for an edit form
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            username: record.username().to_string(),
            full_name: record.full_name().to_string(),
            email: record.email().to_string(),
            age: record.age().map(|a| a.to_string()).unwrap_or_default(),
            about: record.about().to_string(),
        }
    }
}
