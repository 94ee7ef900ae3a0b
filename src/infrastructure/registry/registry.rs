//! Model Registry
//!
//! Maps a model type and provider name to the constructor that builds the
//! provider's client. Constructors are typed per capability, so whatever a
//! language constructor returns is a language model.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    DomainError, EmbeddingModel, LanguageModel, ModelInstance, ModelParams, ModelType,
    SpeechToTextModel, TextToSpeechModel,
};

pub type LanguageConstructor =
    Arc<dyn Fn(&str, &ModelParams) -> Result<Arc<dyn LanguageModel>, DomainError> + Send + Sync>;
pub type EmbeddingConstructor =
    Arc<dyn Fn(&str, &ModelParams) -> Result<Arc<dyn EmbeddingModel>, DomainError> + Send + Sync>;
pub type SpeechToTextConstructor = Arc<
    dyn Fn(&str, &ModelParams) -> Result<Arc<dyn SpeechToTextModel>, DomainError> + Send + Sync,
>;
pub type TextToSpeechConstructor = Arc<
    dyn Fn(&str, &ModelParams) -> Result<Arc<dyn TextToSpeechModel>, DomainError> + Send + Sync,
>;

/// Constructor for one provider's client of one model type
#[derive(Clone)]
pub enum ModelConstructor {
    Language(LanguageConstructor),
    Embedding(EmbeddingConstructor),
    SpeechToText(SpeechToTextConstructor),
    TextToSpeech(TextToSpeechConstructor),
}

impl ModelConstructor {
    pub fn model_type(&self) -> ModelType {
        match self {
            Self::Language(_) => ModelType::Language,
            Self::Embedding(_) => ModelType::Embedding,
            Self::SpeechToText(_) => ModelType::SpeechToText,
            Self::TextToSpeech(_) => ModelType::TextToSpeech,
        }
    }

    /// Build a client for `model_name` with the caller's parameters
    pub fn construct(
        &self,
        model_name: &str,
        params: &ModelParams,
    ) -> Result<ModelInstance, DomainError> {
        Ok(match self {
            Self::Language(build) => ModelInstance::Language(build(model_name, params)?),
            Self::Embedding(build) => ModelInstance::Embedding(build(model_name, params)?),
            Self::SpeechToText(build) => ModelInstance::SpeechToText(build(model_name, params)?),
            Self::TextToSpeech(build) => ModelInstance::TextToSpeech(build(model_name, params)?),
        })
    }
}

impl fmt::Debug for ModelConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelConstructor")
            .field(&self.model_type())
            .finish()
    }
}

/// Type → provider → constructor table
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    constructors: HashMap<ModelType, BTreeMap<String, ModelConstructor>>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language model provider
    pub fn register_language<F>(&mut self, provider: impl Into<String>, build: F) -> &mut Self
    where
        F: Fn(&str, &ModelParams) -> Result<Arc<dyn LanguageModel>, DomainError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(provider.into(), ModelConstructor::Language(Arc::new(build)))
    }

    /// Register an embedding model provider
    pub fn register_embedding<F>(&mut self, provider: impl Into<String>, build: F) -> &mut Self
    where
        F: Fn(&str, &ModelParams) -> Result<Arc<dyn EmbeddingModel>, DomainError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(provider.into(), ModelConstructor::Embedding(Arc::new(build)))
    }

    /// Register a speech-to-text model provider
    pub fn register_speech_to_text<F>(
        &mut self,
        provider: impl Into<String>,
        build: F,
    ) -> &mut Self
    where
        F: Fn(&str, &ModelParams) -> Result<Arc<dyn SpeechToTextModel>, DomainError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(provider.into(), ModelConstructor::SpeechToText(Arc::new(build)))
    }

    /// Register a text-to-speech model provider
    pub fn register_text_to_speech<F>(
        &mut self,
        provider: impl Into<String>,
        build: F,
    ) -> &mut Self
    where
        F: Fn(&str, &ModelParams) -> Result<Arc<dyn TextToSpeechModel>, DomainError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(provider.into(), ModelConstructor::TextToSpeech(Arc::new(build)))
    }

    /// Register a constructor under its own model type, replacing any
    /// previous constructor for the same provider
    pub fn insert(&mut self, provider: String, constructor: ModelConstructor) -> &mut Self {
        let model_type = constructor.model_type();
        debug!(model_type = %model_type, provider = %provider, "Registering model provider");

        self.constructors
            .entry(model_type)
            .or_default()
            .insert(provider, constructor);
        self
    }

    /// Find the constructor for a persisted type string and provider
    ///
    /// Fails with `InvalidType` when the type is not recognized and with
    /// `IncompatibleProvider` when nothing is registered for the pair.
    pub fn resolve(&self, model_type: &str, provider: &str) -> Result<&ModelConstructor, DomainError> {
        let kind: ModelType = model_type.parse()?;

        self.constructors
            .get(&kind)
            .and_then(|providers| providers.get(provider))
            .ok_or_else(|| DomainError::incompatible_provider(provider, kind.as_str()))
    }

    /// Whether `provider` can build models of `model_type`
    pub fn supports(&self, model_type: ModelType, provider: &str) -> bool {
        self.constructors
            .get(&model_type)
            .is_some_and(|providers| providers.contains_key(provider))
    }

    /// Providers registered for a model type, sorted by name
    pub fn providers(&self, model_type: ModelType) -> Vec<&str> {
        self.constructors
            .get(&model_type)
            .map(|providers| providers.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
