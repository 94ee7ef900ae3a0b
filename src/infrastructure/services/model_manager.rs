//! Model manager - resolves default models and caches constructed clients

use std::sync::Arc;
use std::time::Instant;

use moka::future::Cache;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{
    DefaultModelIssue, DefaultModels, DefaultModelsRepository, DomainError, EmbeddingModel,
    LanguageModel, ModelCacheKey, ModelId, ModelInstance, ModelParams, ModelPurpose,
    ModelRepository, Model, SpeechToTextModel, TextToSpeechModel,
};
use crate::infrastructure::observability::{
    record_cache_hit, record_cache_miss, record_construction, record_resolution_error,
};
use crate::infrastructure::registry::ModelRegistry;

/// Resolves model ids and default-model purposes into cached model clients
///
/// Owned by the application's startup routine and shared as
/// `Arc<ModelManager>`. The cache never evicts on its own; it only empties
/// on [`ModelManager::clear_cache`].
#[derive(Debug)]
pub struct ModelManager {
    models: Arc<dyn ModelRepository>,
    defaults_repository: Arc<dyn DefaultModelsRepository>,
    registry: Arc<ModelRegistry>,
    cache: Cache<ModelCacheKey, ModelInstance>,
    defaults: RwLock<Option<DefaultModels>>,
}

impl ModelManager {
    /// Create a manager without loading defaults yet
    ///
    /// Defaults are loaded on first access to [`ModelManager::defaults`].
    pub fn new(
        models: Arc<dyn ModelRepository>,
        defaults_repository: Arc<dyn DefaultModelsRepository>,
        registry: Arc<ModelRegistry>,
    ) -> Self {
        Self {
            models,
            defaults_repository,
            registry,
            cache: Cache::builder().build(),
            defaults: RwLock::new(None),
        }
    }

    /// Create a manager and load the defaults record
    pub async fn load(
        models: Arc<dyn ModelRepository>,
        defaults_repository: Arc<dyn DefaultModelsRepository>,
        registry: Arc<ModelRegistry>,
    ) -> Result<Self, DomainError> {
        let manager = Self::new(models, defaults_repository, registry);
        manager.refresh_defaults().await?;
        Ok(manager)
    }

    /// Whether the defaults record has been loaded
    pub async fn is_ready(&self) -> bool {
        self.defaults.read().await.is_some()
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Return the model client for `model_id` built with `params`
    ///
    /// Repeated calls with the same id and an equal parameter set return the
    /// same client. Concurrent misses on one key construct it once.
    pub async fn get_model(
        &self,
        model_id: &str,
        params: &ModelParams,
    ) -> Result<ModelInstance, DomainError> {
        if model_id.is_empty() {
            let error = DomainError::precondition("Model ID cannot be empty");
            record_resolution_error(&error);
            return Err(error);
        }

        let key = ModelCacheKey::new(model_id, params);

        if let Some(instance) = self.cache.get(&key).await {
            debug!(cache_key = %key, "Model cache hit");
            record_cache_hit(instance.model_type());
            return Ok(instance);
        }

        record_cache_miss();

        let result = self
            .cache
            .try_get_with(key, self.construct(model_id, params))
            .await
            .map_err(Arc::unwrap_or_clone);

        if let Err(ref error) = result {
            warn!(model_id = %model_id, error = %error, "Failed to resolve model");
            record_resolution_error(error);
        }

        result
    }

    async fn construct(
        &self,
        model_id: &str,
        params: &ModelParams,
    ) -> Result<ModelInstance, DomainError> {
        let not_found = || DomainError::not_found(format!("Model with ID {} not found", model_id));

        // No stored record can carry an id that fails validation
        let id = ModelId::new(model_id).map_err(|_| not_found())?;

        let model = self.models.get(&id).await?.ok_or_else(not_found)?;

        let constructor = self.registry.resolve(model.model_type(), model.provider())?;

        let started = Instant::now();
        let instance = constructor.construct(model.name(), params)?;
        record_construction(instance.model_type(), model.provider(), started.elapsed());

        info!(
            model_id = %id,
            model_name = %model.name(),
            provider = %model.provider(),
            model_type = %instance.model_type(),
            "Constructed model instance"
        );

        Ok(instance)
    }

    /// Return the default model client for `purpose`
    ///
    /// Transformation and tools fall back to the chat default when unset.
    pub async fn get_default_model(
        &self,
        purpose: ModelPurpose,
        params: &ModelParams,
    ) -> Result<ModelInstance, DomainError> {
        let model_id = {
            let defaults = self.defaults().await?;
            defaults
                .resolve(purpose)
                .map(str::to_string)
                .ok_or_else(|| DomainError::no_default_configured(purpose.as_str()))
        };

        let model_id = match model_id {
            Ok(id) => id,
            Err(error) => {
                record_resolution_error(&error);
                return Err(error);
            }
        };

        debug!(purpose = %purpose, model_id = %model_id, "Resolved default model");
        self.get_model(&model_id, params).await
    }

    /// Like [`ModelManager::get_default_model`] with the purpose given by name
    ///
    /// Unknown purpose names fail with `NoDefaultConfigured`.
    pub async fn get_default_model_named(
        &self,
        purpose: &str,
        params: &ModelParams,
    ) -> Result<ModelInstance, DomainError> {
        let purpose: ModelPurpose = purpose.parse()?;
        self.get_default_model(purpose, params).await
    }

    /// Default language model for a chat-like purpose
    pub async fn language_model(
        &self,
        purpose: ModelPurpose,
        params: &ModelParams,
    ) -> Result<Arc<dyn LanguageModel>, DomainError> {
        self.get_default_model(purpose, params)
            .await?
            .into_language()
    }

    /// Default speech-to-text model, built without parameters
    pub async fn speech_to_text(&self) -> Result<Arc<dyn SpeechToTextModel>, DomainError> {
        self.get_default_model(ModelPurpose::SpeechToText, &ModelParams::new())
            .await?
            .into_speech_to_text()
    }

    /// Default text-to-speech model, built without parameters
    pub async fn text_to_speech(&self) -> Result<Arc<dyn TextToSpeechModel>, DomainError> {
        self.get_default_model(ModelPurpose::TextToSpeech, &ModelParams::new())
            .await?
            .into_text_to_speech()
    }

    /// Default embedding model, built without parameters
    pub async fn embedding_model(&self) -> Result<Arc<dyn EmbeddingModel>, DomainError> {
        self.get_default_model(ModelPurpose::Embedding, &ModelParams::new())
            .await?
            .into_embedding()
    }

    /// Reload the defaults record from storage
    pub async fn refresh_defaults(&self) -> Result<(), DomainError> {
        let loaded = self.defaults_repository.load().await?;
        debug!(configured = loaded.entries().count(), "Loaded default models");

        *self.defaults.write().await = Some(loaded);
        Ok(())
    }

    /// Current defaults record, loading it on first access
    pub async fn defaults(&self) -> Result<DefaultModels, DomainError> {
        if let Some(defaults) = self.defaults.read().await.as_ref() {
            return Ok(defaults.clone());
        }

        self.refresh_defaults().await.map_err(|e| {
            DomainError::initialization(format!(
                "Failed to initialize default models configuration: {}",
                e
            ))
        })?;

        self.defaults.read().await.clone().ok_or_else(|| {
            DomainError::initialization("Failed to initialize default models configuration")
        })
    }

    /// Persist a new defaults record and make it current
    pub async fn update_defaults(&self, defaults: DefaultModels) -> Result<(), DomainError> {
        let saved = self.defaults_repository.save(defaults).await?;
        *self.defaults.write().await = Some(saved);

        info!("Default models updated");
        Ok(())
    }

    /// Drop every cached model client
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
        info!("Model cache cleared");
    }

    /// Number of cached model clients
    pub async fn cached_models(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Persisted models of a type, in storage order
    pub async fn get_models_by_type(&self, model_type: &str) -> Result<Vec<Model>, DomainError> {
        self.models.get_models_by_type(model_type).await
    }

    /// Check every configured default against the stored models and registry
    pub async fn validate_defaults(&self) -> Result<Vec<DefaultModelIssue>, DomainError> {
        let defaults = self.defaults().await?;
        let mut issues = Vec::new();

        for (purpose, model_id) in defaults.entries() {
            let model = match ModelId::new(model_id) {
                Ok(id) => self.models.get(&id).await?,
                Err(_) => None,
            };

            let Some(model) = model else {
                issues.push(DefaultModelIssue::MissingModel {
                    purpose,
                    model_id: model_id.to_string(),
                });
                continue;
            };

            let actual = match model.kind() {
                Ok(kind) => kind,
                Err(_) => {
                    issues.push(DefaultModelIssue::UnrecognizedType {
                        purpose,
                        model_id: model_id.to_string(),
                        model_type: model.model_type().to_string(),
                    });
                    continue;
                }
            };

            let expected = purpose.model_type();
            if actual != expected {
                issues.push(DefaultModelIssue::IncompatibleType {
                    purpose,
                    model_id: model_id.to_string(),
                    expected,
                    actual,
                });
                continue;
            }

            if !self.registry.supports(actual, model.provider()) {
                issues.push(DefaultModelIssue::UnsupportedProvider {
                    purpose,
                    model_id: model_id.to_string(),
                    provider: model.provider().to_string(),
                });
            }
        }

        if !issues.is_empty() {
            warn!(count = issues.len(), "Default model configuration has issues");
        }

        Ok(issues)
    }
}
