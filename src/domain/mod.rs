//! Domain layer - Core business logic and entities

pub mod error;
pub mod storage;
pub mod user;

pub use error::DomainError;
pub use storage::{Storage, StorageEntity};
pub use user::{
    validate_profile, UserProfileInput, UserRecord, UserRepository, UserValidationError,
    ValidatedProfile, ValidationMode,
};
