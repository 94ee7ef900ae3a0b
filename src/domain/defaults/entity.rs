//! Default model selection record

use serde::{Deserialize, Serialize};

use super::ModelPurpose;
use crate::domain::storage::{StorageEntity, StorageKey};

/// Fixed record id of the singleton defaults record
pub const DEFAULT_MODELS_RECORD_ID: &str = "open_notebook:default_models";

/// Key of the defaults record; there is only ever one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefaultModelsId(String);

impl DefaultModelsId {
    pub fn singleton() -> Self {
        Self(DEFAULT_MODELS_RECORD_ID.to_string())
    }
}

impl StorageKey for DefaultModelsId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DefaultModelsId {
    fn default() -> Self {
        Self::singleton()
    }
}

/// Per-purpose default model ids
///
/// Fields hold model ids and are not validated when loaded; dangling or
/// mistyped references surface when a default is resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultModels {
    #[serde(default)]
    id: DefaultModelsId,

    #[serde(default)]
    pub default_chat_model: Option<String>,
    #[serde(default)]
    pub default_transformation_model: Option<String>,
    #[serde(default)]
    pub large_context_model: Option<String>,
    #[serde(default)]
    pub default_text_to_speech_model: Option<String>,
    #[serde(default)]
    pub default_speech_to_text_model: Option<String>,
    #[serde(default)]
    pub default_embedding_model: Option<String>,
    #[serde(default)]
    pub default_tools_model: Option<String>,
}

impl DefaultModels {
    /// A blank record with nothing configured
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, purpose: ModelPurpose, model_id: impl Into<String>) -> Self {
        self.set(purpose, Some(model_id.into()));
        self
    }

    /// The field configured for `purpose` itself, without fallback
    pub fn configured(&self, purpose: ModelPurpose) -> Option<&str> {
        let value = match purpose {
            ModelPurpose::Chat => &self.default_chat_model,
            ModelPurpose::Transformation => &self.default_transformation_model,
            ModelPurpose::Tools => &self.default_tools_model,
            ModelPurpose::Embedding => &self.default_embedding_model,
            ModelPurpose::TextToSpeech => &self.default_text_to_speech_model,
            ModelPurpose::SpeechToText => &self.default_speech_to_text_model,
            ModelPurpose::LargeContext => &self.large_context_model,
        };

        value.as_deref().filter(|id| !id.is_empty())
    }

    /// The model id to use for `purpose`
    ///
    /// Transformation and tools fall back to the chat default when their
    /// own field is unset or empty.
    pub fn resolve(&self, purpose: ModelPurpose) -> Option<&str> {
        self.configured(purpose).or_else(|| {
            if purpose.falls_back_to_chat() {
                self.configured(ModelPurpose::Chat)
            } else {
                None
            }
        })
    }

    pub fn set(&mut self, purpose: ModelPurpose, model_id: Option<String>) {
        let field = match purpose {
            ModelPurpose::Chat => &mut self.default_chat_model,
            ModelPurpose::Transformation => &mut self.default_transformation_model,
            ModelPurpose::Tools => &mut self.default_tools_model,
            ModelPurpose::Embedding => &mut self.default_embedding_model,
            ModelPurpose::TextToSpeech => &mut self.default_text_to_speech_model,
            ModelPurpose::SpeechToText => &mut self.default_speech_to_text_model,
            ModelPurpose::LargeContext => &mut self.large_context_model,
        };
        *field = model_id;
    }

    /// Purposes with their own field populated, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (ModelPurpose, &str)> {
        ModelPurpose::ALL
            .into_iter()
            .filter_map(|purpose| self.configured(purpose).map(|id| (purpose, id)))
    }
}

impl StorageEntity for DefaultModels {
    type Key = DefaultModelsId;
    const TABLE: &'static str = "default_models";

    fn key(&self) -> &Self::Key {
        &self.id
    }
}
