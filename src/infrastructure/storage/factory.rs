//! Storage factory for runtime storage selection

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::DomainError;

use super::in_memory::InMemoryStorage;
use super::postgres::{PostgresConfig, PostgresStorage};

/// Supported storage types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// In-memory storage configuration
    InMemory,
    /// PostgreSQL storage configuration
    Postgres(PostgresConfig),
}

impl StorageConfig {
    /// Creates an in-memory storage configuration
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Creates a PostgreSQL storage configuration
    pub fn postgres(config: PostgresConfig) -> Self {
        Self::Postgres(config)
    }

    /// Creates a PostgreSQL configuration from a URL
    pub fn postgres_url(url: impl Into<String>) -> Self {
        Self::Postgres(PostgresConfig::new(url))
    }

    /// Returns the storage type
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Opened storage backend that hands out per-table storages
///
/// A PostgreSQL backend shares one connection pool across all tables.
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory,
    Postgres(PgPool),
}

impl StorageBackend {
    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

/// Factory for creating storage instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Opens the backend described by the configuration
    pub async fn open(config: &StorageConfig) -> Result<StorageBackend, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory storage");
                Ok(StorageBackend::InMemory)
            }
            StorageConfig::Postgres(pg_config) => {
                info!(max_connections = pg_config.max_connections, "Connecting to PostgreSQL");
                let pool = pg_config.connect().await?;
                info!("PostgreSQL connection established");
                Ok(StorageBackend::Postgres(pool))
            }
        }
    }

    /// Creates the storage for `E` on an opened backend
    pub async fn create<E>(backend: &StorageBackend) -> Result<Arc<dyn Storage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        let storage: Arc<dyn Storage<E>> = match backend {
            StorageBackend::InMemory => Self::create_in_memory::<E>(),
            StorageBackend::Postgres(pool) => {
                Self::create_postgres_with_pool::<E>(pool.clone()).await?
            }
        };

        Ok(storage)
    }

    /// Creates an in-memory storage
    pub fn create_in_memory<E>() -> Arc<InMemoryStorage<E>>
    where
        E: StorageEntity,
    {
        Arc::new(InMemoryStorage::new())
    }

    /// Creates a PostgreSQL storage on an existing pool, creating its table if needed
    pub async fn create_postgres_with_pool<E>(
        pool: PgPool,
    ) -> Result<Arc<PostgresStorage<E>>, DomainError>
    where
        E: StorageEntity + 'static,
    {
        let storage = PostgresStorage::new(pool);
        storage.ensure_table().await?;
        Ok(Arc::new(storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Model;

    #[test]
    fn test_storage_type_from_str() {
        assert_eq!(
            StorageType::from_str("memory"),
            Some(StorageType::InMemory)
        );
        assert_eq!(
            StorageType::from_str("In-Memory"),
            Some(StorageType::InMemory)
        );
        assert_eq!(
            StorageType::from_str("postgresql"),
            Some(StorageType::Postgres)
        );
        assert_eq!(StorageType::from_str("pg"), Some(StorageType::Postgres));
        assert_eq!(StorageType::from_str("surreal"), None);
    }

    #[test]
    fn test_storage_config_types() {
        let in_memory = StorageConfig::in_memory();
        assert_eq!(in_memory.storage_type(), StorageType::InMemory);

        let postgres = StorageConfig::postgres_url("postgres://localhost/test");
        assert_eq!(postgres.storage_type(), StorageType::Postgres);
    }

    #[tokio::test]
    async fn test_open_in_memory_backend() {
        let backend = StorageFactory::open(&StorageConfig::in_memory())
            .await
            .unwrap();
        assert_eq!(backend.storage_type(), StorageType::InMemory);

        let storage = StorageFactory::create::<Model>(&backend).await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 0);
    }
}
