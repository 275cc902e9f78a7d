use thiserror::Error;

/// Core domain errors
///
/// Rule violations, duplicates and missing profiles are ordinary outcomes of
/// the user service; only infrastructure failures surface here.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("Failed to read users.json");
        assert_eq!(error.to_string(), "Storage error: Failed to read users.json");
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Unknown storage backend 'redis'");
        assert_eq!(
            error.to_string(),
            "Configuration error: Unknown storage backend 'redis'"
        );
    }
}
