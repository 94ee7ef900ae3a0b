//! Storage-backed repository for the default-model record

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{
    DefaultModels, DefaultModelsId, DefaultModelsRepository, DomainError, Storage,
};

/// Defaults repository with get-or-create semantics over a storage backend
#[derive(Debug)]
pub struct StorageDefaultModelsRepository {
    storage: Arc<dyn Storage<DefaultModels>>,
}

impl StorageDefaultModelsRepository {
    pub fn new(storage: Arc<dyn Storage<DefaultModels>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl DefaultModelsRepository for StorageDefaultModelsRepository {
    async fn load(&self) -> Result<DefaultModels, DomainError> {
        let key = DefaultModelsId::singleton();

        if let Some(defaults) = self.storage.get(&key).await? {
            return Ok(defaults);
        }

        info!("No default models record found, creating a blank one");

        match self.storage.create(DefaultModels::new()).await {
            Ok(defaults) => Ok(defaults),
            // Another writer created it first
            Err(DomainError::Conflict { .. }) => self
                .storage
                .get(&key)
                .await?
                .ok_or_else(|| DomainError::initialization("Default models record vanished")),
            Err(e) => Err(e),
        }
    }

    async fn save(&self, defaults: DefaultModels) -> Result<DefaultModels, DomainError> {
        self.storage.save(defaults).await
    }
}
