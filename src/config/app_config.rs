use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::storage::{StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where the profile collection is kept
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `file` or `memory`
    pub backend: String,
    /// Path of the JSON file for the `file` backend
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            path: "users.json".to_string(),
        }
    }
}

impl StorageSettings {
    /// Resolve the settings into a concrete storage configuration
    pub fn to_storage_config(&self) -> Result<StorageConfig, DomainError> {
        match StorageType::from_str(&self.backend) {
            Some(StorageType::File) => Ok(StorageConfig::file(&self.path)),
            Some(StorageType::InMemory) => Ok(StorageConfig::in_memory()),
            None => Err(DomainError::configuration(format!(
                "Unknown storage backend '{}'",
                self.backend
            ))),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.storage.backend, "file");
        assert_eq!(config.storage.path, "users.json");
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "port": 9000 },
            "storage": { "path": "/var/lib/profiles/users.json" }
        }))
        .unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.backend, "file");
        assert_eq!(config.storage.path, "/var/lib/profiles/users.json");
    }

    #[test]
    fn test_storage_settings_resolution() {
        let settings = StorageSettings {
            backend: "memory".to_string(),
            path: String::new(),
        };
        assert_eq!(settings.to_storage_config().unwrap(), StorageConfig::in_memory());

        let settings = StorageSettings::default();
        assert_eq!(
            settings.to_storage_config().unwrap(),
            StorageConfig::file("users.json")
        );

        let settings = StorageSettings {
            backend: "postgres".to_string(),
            path: String::new(),
        };
        assert!(matches!(
            settings.to_storage_config(),
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_log_format_deserialization() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
