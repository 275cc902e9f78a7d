//! User service for profile registration and editing

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    validate_profile, UserProfileInput, UserRecord, UserRepository, UserValidationError,
    ValidationMode,
};
use crate::domain::DomainError;

/// Result of a registration attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// The record was stored; its username is the key to navigate to
    Registered(UserRecord),
    /// Nothing was stored; messages to show the user
    Rejected(Vec<String>),
}

/// Result of a profile update attempt
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The replacement record was stored
    Updated(UserRecord),
    /// Nothing was stored; the original record is returned for re-display
    Rejected {
        errors: Vec<String>,
        original: UserRecord,
    },
    /// No record exists under the requested username
    NotFound,
}

/// User service composing the validator and the repository
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List all users in insertion order
    pub async fn list(&self) -> Result<Vec<UserRecord>, DomainError> {
        self.repository.list().await
    }

    /// Get a single profile by username
    pub async fn profile(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        self.repository.find(username).await
    }

    /// Form values prefilled from an existing profile
    pub async fn edit_form(&self, username: &str) -> Result<Option<UserProfileInput>, DomainError> {
        Ok(self
            .repository
            .find(username)
            .await?
            .map(|record| UserProfileInput::from_record(&record)))
    }

    /// Register a new user
    pub async fn register(&self, input: &UserProfileInput) -> Result<RegisterOutcome, DomainError> {
        let validated = validate_profile(input, ValidationMode::Register);

        if !validated.is_valid() {
            debug!(errors = validated.errors.len(), "Registration rejected by validation");
            return Ok(RegisterOutcome::Rejected(validated.messages()));
        }

        let record = validated.record;

        if self.repository.find(record.username()).await?.is_some() {
            debug!(username = %record.username(), "Registration rejected, username exists");
            return Ok(username_taken());
        }

        // insert re-checks under its own lock; a concurrent registration can still win
        if !self.repository.insert(record.clone()).await? {
            debug!(username = %record.username(), "Registration lost to a concurrent insert");
            return Ok(username_taken());
        }

        info!(username = %record.username(), "User registered");
        Ok(RegisterOutcome::Registered(record))
    }

    /// Update an existing user's profile
    ///
    /// The stored username never changes: the replacement keeps the lookup
    /// key even when the input carries a different (valid) username.
    pub async fn update(
        &self,
        username: &str,
        input: &UserProfileInput,
    ) -> Result<UpdateOutcome, DomainError> {
        let Some(original) = self.repository.find(username).await? else {
            debug!(username = %username, "Update of unknown user");
            return Ok(UpdateOutcome::NotFound);
        };

        let validated = validate_profile(input, ValidationMode::Update);

        if !validated.is_valid() {
            debug!(username = %username, errors = validated.errors.len(), "Update rejected by validation");
            return Ok(UpdateOutcome::Rejected {
                errors: validated.messages(),
                original,
            });
        }

        let replacement = validated.record.with_username(original.username());
        self.repository.upsert(username, replacement.clone()).await?;

        info!(username = %username, "User profile updated");
        Ok(UpdateOutcome::Updated(replacement))
    }
}

fn username_taken() -> RegisterOutcome {
    RegisterOutcome::Rejected(vec![UserValidationError::UsernameTaken.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::storage::InMemoryStorage;
    use crate::infrastructure::user::StorageUserRepository;

    fn create_service() -> UserService {
        let storage = Arc::new(InMemoryStorage::<UserRecord>::new());
        UserService::new(Arc::new(StorageUserRepository::new(storage)))
    }

    fn form(username: &str, full_name: &str, email: &str, age: &str, about: &str) -> UserProfileInput {
        UserProfileInput {
            username: username.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            age: age.to_string(),
            about: about.to_string(),
        }
    }

    fn alice_form() -> UserProfileInput {
        form("alice", "Alice A", "a@b.com", "30", "hi")
    }

    #[tokio::test]
    async fn test_register_user() {
        let service = create_service();

        let outcome = service.register(&alice_form()).await.unwrap();

        let expected = UserRecord::new("alice", "Alice A", "a@b.com", Some(30), "hi");
        assert_eq!(outcome, RegisterOutcome::Registered(expected.clone()));
        assert_eq!(service.profile("alice").await.unwrap(), Some(expected));
    }

    #[tokio::test]
    async fn test_register_invalid_input() {
        let service = create_service();

        let outcome = service
            .register(&form("ab", "Short", "bad-email", "", ""))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RegisterOutcome::Rejected(vec![
                "Username must be 3-30 chars: letters, numbers, _ or -.".to_string(),
                "Invalid email address.".to_string(),
            ])
        );
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let service = create_service();

        service.register(&alice_form()).await.unwrap();
        let outcome = service
            .register(&form("alice", "Another Alice", "other@b.com", "", ""))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RegisterOutcome::Rejected(vec!["Username already exists. Choose another.".to_string()])
        );

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].full_name(), "Alice A");
    }

    #[tokio::test]
    async fn test_register_lost_insert_race_is_conflict() {
        let mut repository = MockUserRepository::new();
        repository.expect_find().returning(|_| Ok(None));
        repository.expect_insert().times(1).returning(|_| Ok(false));
        let service = UserService::new(Arc::new(repository));

        let outcome = service.register(&alice_form()).await.unwrap();

        assert_eq!(
            outcome,
            RegisterOutcome::Rejected(vec!["Username already exists. Choose another.".to_string()])
        );
    }

    #[tokio::test]
    async fn test_register_storage_failure() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find()
            .returning(|_| Err(DomainError::storage("disk gone")));
        repository.expect_insert().never();
        let service = UserService::new(Arc::new(repository));

        let result = service.register(&alice_form()).await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_register_then_update_scenario() {
        let service = create_service();

        service.register(&alice_form()).await.unwrap();
        assert_eq!(service.profile("alice").await.unwrap().unwrap().age(), Some(30));

        let outcome = service
            .update("alice", &form("", "Alice B", "a@b.com", "", "hi"))
            .await
            .unwrap();

        let expected = UserRecord::new("alice", "Alice B", "a@b.com", None, "hi");
        assert_eq!(outcome, UpdateOutcome::Updated(expected.clone()));

        let stored = service.profile("alice").await.unwrap().unwrap();
        assert_eq!(stored.full_name(), "Alice B");
        assert_eq!(stored.age(), None);
        assert_eq!(stored, expected);
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let service = create_service();

        let outcome = service
            .update("ghost", &form("", "Ghost", "g@h.io", "", ""))
            .await
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_invalid_returns_original() {
        let service = create_service();
        service.register(&alice_form()).await.unwrap();

        let outcome = service
            .update("alice", &form("", "", "a@b.com", "200", ""))
            .await
            .unwrap();

        let original = UserRecord::new("alice", "Alice A", "a@b.com", Some(30), "hi");
        assert_eq!(
            outcome,
            UpdateOutcome::Rejected {
                errors: vec![
                    "Full name is required.".to_string(),
                    "Age must be between 0 and 150.".to_string(),
                ],
                original: original.clone(),
            }
        );
        assert_eq!(service.profile("alice").await.unwrap(), Some(original));
    }

    #[tokio::test]
    async fn test_update_keeps_lookup_username() {
        let service = create_service();
        service.register(&alice_form()).await.unwrap();

        let outcome = service
            .update("alice", &form("mallory", "Alice C", "a@b.com", "31", ""))
            .await
            .unwrap();

        match outcome {
            UpdateOutcome::Updated(record) => assert_eq!(record.username(), "alice"),
            other => panic!("expected update, got {:?}", other),
        }

        assert!(service.profile("mallory").await.unwrap().is_none());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_form_prefill() {
        let service = create_service();
        service.register(&alice_form()).await.unwrap();

        let prefill = service.edit_form("alice").await.unwrap().unwrap();

        assert_eq!(prefill, alice_form());
        assert!(service.edit_form("nobody").await.unwrap().is_none());
    }
}
