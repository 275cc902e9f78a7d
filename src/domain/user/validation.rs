//! User profile validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::{UserProfileInput, UserRecord};

/// Errors that can occur during profile validation
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("Username is required.")]
    UsernameRequired,

    #[error("Username must be 3-30 chars: letters, numbers, _ or -.")]
    InvalidUsername,

    #[error("Username already exists. Choose another.")]
    UsernameTaken,

    #[error("Full name is required.")]
    FullNameRequired,

    #[error("Email is required.")]
    EmailRequired,

    #[error("Invalid email address.")]
    InvalidEmail,

    #[error("Age must be between 0 and 150.")]
    AgeOutOfRange,

    #[error("About must be 500 characters or fewer.")]
    AboutTooLong,
}

/// Which form the input came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// New registration; the username is mandatory
    Register,
    /// Profile edit; the username comes from the path and is only checked if submitted
    Update,
}

/// Normalized record plus every rule violation, in field order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProfile {
    pub record: UserRecord,
    pub errors: Vec<UserValidationError>,
}

impl ValidatedProfile {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// User-facing messages for every error
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

const MAX_AGE: i64 = 150;
const MAX_ABOUT_LENGTH: usize = 500;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,30}$").expect("username pattern is valid"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

static AGE_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("age pattern is valid"));

/// Validate a non-empty username
///
/// Rules:
/// - 3 to 30 characters
/// - Only ASCII letters, digits, underscores and hyphens
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::UsernameRequired);
    }

    if !USERNAME_RE.is_match(username) {
        return Err(UserValidationError::InvalidUsername);
    }

    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<(), UserValidationError> {
    if full_name.is_empty() {
        return Err(UserValidationError::FullNameRequired);
    }

    Ok(())
}

/// Validate an email address
///
/// Only the `local@domain.tld` shape is checked: one `@`, no whitespace,
/// and at least one `.` after the `@`.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmailRequired);
    }

    if !EMAIL_RE.is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Normalize a raw age value
///
/// Empty and non-numeric input become `None` without an error. An integer
/// literal outside 0..=150 is an error, including one too large to parse.
pub fn normalize_age(raw: &str) -> Result<Option<i64>, UserValidationError> {
    let raw = raw.trim();

    if !AGE_LITERAL_RE.is_match(raw) {
        return Ok(None);
    }

    raw.parse::<i64>()
        .ok()
        .filter(|age| (0..=MAX_AGE).contains(age))
        .map(Some)
        .ok_or(UserValidationError::AgeOutOfRange)
}

pub fn validate_about(about: &str) -> Result<(), UserValidationError> {
    if about.chars().count() > MAX_ABOUT_LENGTH {
        return Err(UserValidationError::AboutTooLong);
    }

    Ok(())
}

/// Validate and normalize raw profile input
///
/// Every field is checked so that all problems are reported at once. The
/// returned record holds the trimmed values whether or not it is valid.
pub fn validate_profile(input: &UserProfileInput, mode: ValidationMode) -> ValidatedProfile {
    let username = input.username.trim();
    let full_name = input.full_name.trim();
    let email = input.email.trim();
    let about = input.about.trim();

    let mut errors = Vec::new();

    let check_username = match mode {
        ValidationMode::Register => true,
        ValidationMode::Update => !username.is_empty(),
    };

    if check_username {
        if let Err(e) = validate_username(username) {
            errors.push(e);
        }
    }

    if let Err(e) = validate_full_name(full_name) {
        errors.push(e);
    }

    if let Err(e) = validate_email(email) {
        errors.push(e);
    }

    let age = normalize_age(&input.age).unwrap_or_else(|e| {
        errors.push(e);
        None
    });

    if let Err(e) = validate_about(about) {
        errors.push(e);
    }

    ValidatedProfile {
        record: UserRecord::new(username, full_name, email, age, about),
        errors,
    }
}
