//! Model repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{Model, ModelId};
use crate::domain::DomainError;

/// Repository trait for Model persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelRepository: Send + Sync + std::fmt::Debug {
    /// Get a model by ID
    async fn get(&self, id: &ModelId) -> Result<Option<Model>, DomainError>;

    /// Get all models whose persisted type equals `model_type`
    async fn get_models_by_type(&self, model_type: &str) -> Result<Vec<Model>, DomainError>;

    /// Get all models
    async fn list(&self) -> Result<Vec<Model>, DomainError>;

    /// Create a new model
    async fn create(&self, model: Model) -> Result<Model, DomainError>;

    /// Update an existing model
    async fn update(&self, model: Model) -> Result<Model, DomainError>;

    /// Delete a model by ID
    async fn delete(&self, id: &ModelId) -> Result<bool, DomainError>;
}
