//! Domain layer - Core entities, traits and errors

pub mod cache;
pub mod defaults;
pub mod error;
pub mod instance;
pub mod model;
pub mod storage;

pub use cache::ModelCacheKey;
pub use defaults::{
    DefaultModelIssue, DefaultModels, DefaultModelsId, DefaultModelsRepository, ModelPurpose,
    DEFAULT_MODELS_RECORD_ID,
};
pub use error::DomainError;
pub use instance::{
    EmbeddingModel, LanguageModel, ModelClient, ModelInstance, ModelParams, SpeechToTextModel,
    TextToSpeechModel,
};
pub use model::{
    validate_model_fields, validate_model_id, Model, ModelId, ModelRepository, ModelType,
    ModelValidationError,
};
pub use storage::{Storage, StorageEntity, StorageKey};

#[cfg(test)]
pub use defaults::MockDefaultModelsRepository;
#[cfg(test)]
pub use model::MockModelRepository;
