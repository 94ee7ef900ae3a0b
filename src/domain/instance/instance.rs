//! Constructed model instances

use std::sync::Arc;

use super::{EmbeddingModel, LanguageModel, ModelParams, SpeechToTextModel, TextToSpeechModel};
use crate::domain::model::ModelType;
use crate::domain::DomainError;

/// A constructed model client, tagged with its capability
///
/// Cloning is cheap and keeps identity: clones share the same client.
#[derive(Debug, Clone)]
pub enum ModelInstance {
    Language(Arc<dyn LanguageModel>),
    Embedding(Arc<dyn EmbeddingModel>),
    SpeechToText(Arc<dyn SpeechToTextModel>),
    TextToSpeech(Arc<dyn TextToSpeechModel>),
}

impl ModelInstance {
    pub fn model_type(&self) -> ModelType {
        match self {
            Self::Language(_) => ModelType::Language,
            Self::Embedding(_) => ModelType::Embedding,
            Self::SpeechToText(_) => ModelType::SpeechToText,
            Self::TextToSpeech(_) => ModelType::TextToSpeech,
        }
    }

    pub fn provider(&self) -> &str {
        match self {
            Self::Language(m) => m.provider(),
            Self::Embedding(m) => m.provider(),
            Self::SpeechToText(m) => m.provider(),
            Self::TextToSpeech(m) => m.provider(),
        }
    }

    pub fn model_name(&self) -> &str {
        match self {
            Self::Language(m) => m.model_name(),
            Self::Embedding(m) => m.model_name(),
            Self::SpeechToText(m) => m.model_name(),
            Self::TextToSpeech(m) => m.model_name(),
        }
    }

    pub fn params(&self) -> &ModelParams {
        match self {
            Self::Language(m) => m.params(),
            Self::Embedding(m) => m.params(),
            Self::SpeechToText(m) => m.params(),
            Self::TextToSpeech(m) => m.params(),
        }
    }

    /// Whether both values refer to the same constructed client
    pub fn ptr_eq(&self, other: &ModelInstance) -> bool {
        match (self, other) {
            (Self::Language(a), Self::Language(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::Embedding(a), Self::Embedding(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::SpeechToText(a), Self::SpeechToText(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::TextToSpeech(a), Self::TextToSpeech(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }

    pub fn into_language(self) -> Result<Arc<dyn LanguageModel>, DomainError> {
        match self {
            Self::Language(m) => Ok(m),
            other => Err(other.mismatch(ModelType::Language)),
        }
    }

    pub fn into_embedding(self) -> Result<Arc<dyn EmbeddingModel>, DomainError> {
        match self {
            Self::Embedding(m) => Ok(m),
            other => Err(other.mismatch(ModelType::Embedding)),
        }
    }

    pub fn into_speech_to_text(self) -> Result<Arc<dyn SpeechToTextModel>, DomainError> {
        match self {
            Self::SpeechToText(m) => Ok(m),
            other => Err(other.mismatch(ModelType::SpeechToText)),
        }
    }

    pub fn into_text_to_speech(self) -> Result<Arc<dyn TextToSpeechModel>, DomainError> {
        match self {
            Self::TextToSpeech(m) => Ok(m),
            other => Err(other.mismatch(ModelType::TextToSpeech)),
        }
    }

    fn mismatch(&self, expected: ModelType) -> DomainError {
        DomainError::type_mismatch(expected.as_str(), self.model_type().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instance::ModelClient;

    #[derive(Debug)]
    struct FakeClient {
        name: String,
        params: ModelParams,
    }

    impl FakeClient {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                params: ModelParams::new().with("voice", "alloy"),
            }
        }
    }

    impl ModelClient for FakeClient {
        fn provider(&self) -> &str {
            "fake"
        }

        fn model_name(&self) -> &str {
            &self.name
        }

        fn params(&self) -> &ModelParams {
            &self.params
        }
    }

    impl LanguageModel for FakeClient {}
    impl TextToSpeechModel for FakeClient {}

    #[test]
    fn test_accessors_delegate_to_client() {
        let instance = ModelInstance::TextToSpeech(Arc::new(FakeClient::new("tts-1")));

        assert_eq!(instance.model_type(), ModelType::TextToSpeech);
        assert_eq!(instance.provider(), "fake");
        assert_eq!(instance.model_name(), "tts-1");
        assert_eq!(instance.params().get_str("voice"), Some("alloy"));
    }

    #[test]
    fn test_ptr_eq_tracks_identity() {
        let client = Arc::new(FakeClient::new("gpt"));
        let a = ModelInstance::Language(client.clone());
        let b = a.clone();
        let c = ModelInstance::Language(Arc::new(FakeClient::new("gpt")));
        let d = ModelInstance::TextToSpeech(client);

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert!(!a.ptr_eq(&d));
    }

    #[test]
    fn test_into_matching_capability() {
        let instance = ModelInstance::TextToSpeech(Arc::new(FakeClient::new("tts-1")));
        let tts = instance.into_text_to_speech().unwrap();

        assert_eq!(tts.voice(), Some("alloy"));
    }

    #[test]
    fn test_into_wrong_capability_is_type_mismatch() {
        let instance = ModelInstance::Language(Arc::new(FakeClient::new("gpt")));
        let err = instance.into_embedding().unwrap_err();

        assert_eq!(err, DomainError::type_mismatch("embedding", "language"));
    }
}
