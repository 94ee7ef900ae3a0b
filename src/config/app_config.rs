use serde::Deserialize;

use crate::infrastructure::storage::{PostgresConfig, StorageConfig, StorageType};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
    /// Seed file imported at startup when set
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    pub backend: String,
    pub database_url: Option<String>,
    pub max_connections: u32,
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
            backend: "memory".to_string(),
            database_url: None,
            max_connections: 10,
        }
    }
}

impl StorageSettings {
    /// Translate into the storage factory's configuration
    pub fn to_storage_config(&self) -> Result<StorageConfig, config::ConfigError> {
        let storage_type = StorageType::from_str(&self.backend).ok_or_else(|| {
            config::ConfigError::Message(format!("Unknown storage backend: {}", self.backend))
        })?;

        Ok(match storage_type {
            StorageType::InMemory => StorageConfig::in_memory(),
            StorageType::Postgres => {
                let pg = match &self.database_url {
                    Some(url) => PostgresConfig::new(url.clone()),
                    None => PostgresConfig::default(),
                };
                StorageConfig::postgres(pg.with_max_connections(self.max_connections))
            }
        })
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
    fn test_defaults_use_memory_storage() {
        let config = AppConfig::default();

        assert_eq!(config.logging.level, "info");
        assert!(config.seed_file.is_none());
        assert_eq!(
            config.storage.to_storage_config().unwrap().storage_type(),
            StorageType::InMemory
        );
    }

    #[test]
    fn test_postgres_settings() {
        let settings = StorageSettings {
            backend: "postgres".to_string(),
            database_url: Some("postgres://db/notebook".to_string()),
            max_connections: 4,
        };

        match settings.to_storage_config().unwrap() {
            StorageConfig::Postgres(pg) => {
                assert_eq!(pg.url, "postgres://db/notebook");
                assert_eq!(pg.max_connections, 4);
            }
            other => panic!("expected postgres config, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let settings = StorageSettings {
            backend: "sqlite".to_string(),
            ..StorageSettings::default()
        };

        assert!(settings.to_storage_config().is_err());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "seed_file = \"seed.toml\"\n[storage]\nbackend = \"pg\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.seed_file.as_deref(), Some("seed.toml"));
        assert_eq!(config.storage.max_connections, 10);
        assert!(matches!(config.logging.format, LogFormat::Pretty));
    }
}
