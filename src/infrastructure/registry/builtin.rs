//! Built-in provider table
//!
//! Registers the providers the notebook supports for each model type. The
//! constructed client is a `ProviderModel` handle carrying everything the
//! provider SDK needs to open a session.

use std::sync::Arc;

use crate::domain::{
    DomainError, EmbeddingModel, LanguageModel, ModelClient, ModelParams, ModelType,
    SpeechToTextModel, TextToSpeechModel,
};

use super::ModelRegistry;

pub const LANGUAGE_PROVIDERS: &[&str] = &[
    "openai",
    "anthropic",
    "ollama",
    "gemini",
    "vertex",
    "groq",
    "mistral",
    "deepseek",
    "xai",
    "openrouter",
    "azure",
    "openai-compatible",
];

pub const EMBEDDING_PROVIDERS: &[&str] = &[
    "openai",
    "gemini",
    "vertex",
    "ollama",
    "mistral",
    "voyage",
    "azure",
    "openai-compatible",
];

pub const SPEECH_TO_TEXT_PROVIDERS: &[&str] = &["openai", "groq", "elevenlabs", "azure"];

pub const TEXT_TO_SPEECH_PROVIDERS: &[&str] = &["openai", "elevenlabs", "gemini", "vertex", "azure"];

/// Client handle for a built-in provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderModel {
    provider: String,
    model_name: String,
    model_type: ModelType,
    params: ModelParams,
}

impl ProviderModel {
    pub fn new(
        provider: impl Into<String>,
        model_name: impl Into<String>,
        model_type: ModelType,
        params: &ModelParams,
    ) -> Result<Self, DomainError> {
        let provider = provider.into();
        let model_name = model_name.into();

        if model_name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{} {} model requires a model name",
                provider, model_type
            )));
        }

        Ok(Self {
            provider,
            model_name,
            model_type,
            params: params.clone(),
        })
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }
}

impl ModelClient for ProviderModel {
    fn provider(&self) -> &str {
        &self.provider
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn params(&self) -> &ModelParams {
        &self.params
    }
}

impl LanguageModel for ProviderModel {}
impl EmbeddingModel for ProviderModel {}
impl SpeechToTextModel for ProviderModel {}
impl TextToSpeechModel for ProviderModel {}

/// Register every built-in provider
pub fn register_builtin_providers(registry: &mut ModelRegistry) {
    for &provider in LANGUAGE_PROVIDERS {
        registry.register_language(provider, move |name, params| {
            Ok(Arc::new(ProviderModel::new(
                provider,
                name,
                ModelType::Language,
                params,
            )?))
        });
    }

    for &provider in EMBEDDING_PROVIDERS {
        registry.register_embedding(provider, move |name, params| {
            Ok(Arc::new(ProviderModel::new(
                provider,
                name,
                ModelType::Embedding,
                params,
            )?))
        });
    }

    for &provider in SPEECH_TO_TEXT_PROVIDERS {
        registry.register_speech_to_text(provider, move |name, params| {
            Ok(Arc::new(ProviderModel::new(
                provider,
                name,
                ModelType::SpeechToText,
                params,
            )?))
        });
    }

    for &provider in TEXT_TO_SPEECH_PROVIDERS {
        registry.register_text_to_speech(provider, move |name, params| {
            Ok(Arc::new(ProviderModel::new(
                provider,
                name,
                ModelType::TextToSpeech,
                params,
            )?))
        });
    }
}

impl ModelRegistry {
    /// Registry populated with the built-in providers
    pub fn with_builtin_providers() -> Self {
        let mut registry = Self::new();
        register_builtin_providers(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_provider_tables() {
        let registry = ModelRegistry::with_builtin_providers();

        assert!(registry.supports(ModelType::Language, "anthropic"));
        assert!(registry.supports(ModelType::Embedding, "voyage"));
        assert!(registry.supports(ModelType::SpeechToText, "groq"));
        assert!(registry.supports(ModelType::TextToSpeech, "elevenlabs"));

        assert!(!registry.supports(ModelType::Embedding, "anthropic"));
        assert!(!registry.supports(ModelType::TextToSpeech, "groq"));
        assert_eq!(
            registry.providers(ModelType::SpeechToText),
            vec!["azure", "elevenlabs", "groq", "openai"]
        );
    }

    #[test]
    fn test_builtin_constructor_builds_provider_handle() {
        let registry = ModelRegistry::with_builtin_providers();
        let params = ModelParams::new().with("dimensions", 256);

        let instance = registry
            .resolve("embedding", "openai")
            .unwrap()
            .construct("text-embedding-3-small", &params)
            .unwrap();

        let embedding = instance.into_embedding().unwrap();
        assert_eq!(embedding.provider(), "openai");
        assert_eq!(embedding.model_name(), "text-embedding-3-small");
        assert_eq!(embedding.dimensions(), Some(256));
    }

    #[test]
    fn test_structured_reads_flag_value() {
        let build = |params: ModelParams| {
            ProviderModel::new("openai", "gpt", ModelType::Language, &params).unwrap()
        };

        assert!(build(ModelParams::new().with("structured", true)).structured());
        assert!(!build(ModelParams::new().with("structured", false)).structured());
        assert!(!build(ModelParams::new()).structured());
    }

    #[test]
    fn test_provider_model_requires_name() {
        let result = ProviderModel::new("openai", " ", ModelType::Language, &ModelParams::new());
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
