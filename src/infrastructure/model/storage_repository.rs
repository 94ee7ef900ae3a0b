//! Storage-backed model repository

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{DomainError, Model, ModelId, ModelRepository, Storage};

/// Field the persisted type string is stored under
const TYPE_FIELD: &str = "type";

/// Model repository over a generic storage backend
#[derive(Debug)]
pub struct StorageModelRepository {
    storage: Arc<dyn Storage<Model>>,
}

impl StorageModelRepository {
    pub fn new(storage: Arc<dyn Storage<Model>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl ModelRepository for StorageModelRepository {
    async fn get(&self, id: &ModelId) -> Result<Option<Model>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_models_by_type(&self, model_type: &str) -> Result<Vec<Model>, DomainError> {
        let models = self.storage.find_by_field(TYPE_FIELD, model_type).await?;
        debug!(model_type = %model_type, count = models.len(), "Queried models by type");
        Ok(models)
    }

    async fn list(&self) -> Result<Vec<Model>, DomainError> {
        self.storage.list().await
    }

    async fn create(&self, model: Model) -> Result<Model, DomainError> {
        self.storage.create(model).await
    }

    async fn update(&self, model: Model) -> Result<Model, DomainError> {
        self.storage.update(model).await
    }

    async fn delete(&self, id: &ModelId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }
}
