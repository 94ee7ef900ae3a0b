//! Model registry infrastructure - provider constructor table

mod builtin;
#[allow(clippy::module_inception)]
mod registry;

pub use builtin::{
    register_builtin_providers, ProviderModel, EMBEDDING_PROVIDERS, LANGUAGE_PROVIDERS,
    SPEECH_TO_TEXT_PROVIDERS, TEXT_TO_SPEECH_PROVIDERS,
};
pub use registry::{
    EmbeddingConstructor, LanguageConstructor, ModelConstructor, ModelRegistry,
    SpeechToTextConstructor, TextToSpeechConstructor,
};
