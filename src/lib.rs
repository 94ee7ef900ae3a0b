//! Notebook Models
//!
//! Model registry and caching factory for the notebook's AI models:
//! - Persisted model records and a singleton default-model record
//! - Per-purpose default resolution with chat fallback
//! - Provider constructor registry for language, embedding, speech-to-text
//!   and text-to-speech models
//! - A cache of constructed clients keyed by model id and parameters

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::{DefaultModels, DefaultModelsRepository, Model, ModelRepository};
use infrastructure::{
    model::{StorageDefaultModelsRepository, StorageModelRepository},
    registry::ModelRegistry,
    services::{ModelManager, SeedService},
    storage::StorageFactory,
};
use tracing::info;

/// Wired-up repositories and the model manager
#[derive(Debug, Clone)]
pub struct AppState {
    pub models: Arc<dyn ModelRepository>,
    pub defaults: Arc<dyn DefaultModelsRepository>,
    pub manager: Arc<ModelManager>,
}

/// Create the application state with the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// Opens storage, imports the configured seed file, registers the built-in
/// providers and loads the default-model record.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = config.storage.to_storage_config()?;
    info!("Storage backend: {:?}", storage_config.storage_type());

    let backend = StorageFactory::open(&storage_config).await?;
    let model_storage = StorageFactory::create::<Model>(&backend).await?;
    let defaults_storage = StorageFactory::create::<DefaultModels>(&backend).await?;

    let models: Arc<dyn ModelRepository> = Arc::new(StorageModelRepository::new(model_storage));
    let defaults: Arc<dyn DefaultModelsRepository> =
        Arc::new(StorageDefaultModelsRepository::new(defaults_storage));

    if let Some(seed_file) = &config.seed_file {
        SeedService::new(models.clone(), defaults.clone())
            .import_seed(seed_file)
            .await?;
    }

    let registry = ModelRegistry::with_builtin_providers();
    let manager = ModelManager::load(models.clone(), defaults.clone(), Arc::new(registry)).await?;

    Ok(AppState {
        models,
        defaults,
        manager: Arc::new(manager),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelParams, ModelPurpose, ModelType};

    #[tokio::test]
    async fn test_create_app_state_in_memory() {
        let state = create_app_state().await.unwrap();

        assert!(state.manager.is_ready().await);
        assert!(state.models.list().await.unwrap().is_empty());
        assert_eq!(state.manager.cached_models().await, 0);
    }

    #[tokio::test]
    async fn test_create_app_state_with_seed() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("seed.toml");
        std::fs::write(
            &seed,
            r#"
[[models]]
id = "m1"
name = "gpt"
provider = "openai"
type = "chat"

[defaults]
default_chat_model = "m1"
"#,
        )
        .unwrap();

        let config = AppConfig {
            seed_file: Some(seed.display().to_string()),
            ..AppConfig::default()
        };
        let state = create_app_state_with_config(&config).await.unwrap();

        let chat = state
            .manager
            .get_default_model(ModelPurpose::Chat, &ModelParams::new())
            .await
            .unwrap();
        assert_eq!(chat.model_type(), ModelType::Language);
        assert_eq!(chat.provider(), "openai");
        assert_eq!(chat.model_name(), "gpt");
    }
}
