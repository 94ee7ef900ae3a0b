//! Defaults record repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::DefaultModels;
use crate::domain::DomainError;

/// Repository for the singleton default-model record
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DefaultModelsRepository: Send + Sync + std::fmt::Debug {
    /// Load the record, creating a blank one if none is stored yet
    async fn load(&self) -> Result<DefaultModels, DomainError>;

    /// Store the record, replacing any existing one
    async fn save(&self, defaults: DefaultModels) -> Result<DefaultModels, DomainError>;
}
