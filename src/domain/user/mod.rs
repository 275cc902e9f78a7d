//! User profile domain
//!
//! This module provides the profile record, the untyped form input it is
//! normalized from, the shared field validator and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{UserProfileInput, UserRecord};
pub use repository::UserRepository;
pub use validation::{
    normalize_age, validate_about, validate_email, validate_full_name, validate_profile,
    validate_username, UserValidationError, ValidatedProfile, ValidationMode,
};

#[cfg(test)]
pub use repository::MockUserRepository;
