//! Model purposes a default can be configured for

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::model::ModelType;
use crate::domain::DomainError;

/// Logical use a default model is selected for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelPurpose {
    Chat,
    Transformation,
    Tools,
    Embedding,
    TextToSpeech,
    SpeechToText,
    LargeContext,
}

impl ModelPurpose {
    pub const ALL: [ModelPurpose; 7] = [
        ModelPurpose::Chat,
        ModelPurpose::Transformation,
        ModelPurpose::Tools,
        ModelPurpose::Embedding,
        ModelPurpose::TextToSpeech,
        ModelPurpose::SpeechToText,
        ModelPurpose::LargeContext,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelPurpose::Chat => "chat",
            ModelPurpose::Transformation => "transformation",
            ModelPurpose::Tools => "tools",
            ModelPurpose::Embedding => "embedding",
            ModelPurpose::TextToSpeech => "text_to_speech",
            ModelPurpose::SpeechToText => "speech_to_text",
            ModelPurpose::LargeContext => "large_context",
        }
    }

    /// Model type a default for this purpose must have
    pub fn model_type(&self) -> ModelType {
        match self {
            ModelPurpose::Chat
            | ModelPurpose::Transformation
            | ModelPurpose::Tools
            | ModelPurpose::LargeContext => ModelType::Language,
            ModelPurpose::Embedding => ModelType::Embedding,
            ModelPurpose::TextToSpeech => ModelType::TextToSpeech,
            ModelPurpose::SpeechToText => ModelType::SpeechToText,
        }
    }

    /// Whether an unset default falls back to the chat default
    pub fn falls_back_to_chat(&self) -> bool {
        matches!(self, ModelPurpose::Transformation | ModelPurpose::Tools)
    }
}

impl fmt::Display for ModelPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelPurpose {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.as_str() == s)
            .ok_or_else(|| DomainError::no_default_configured(s))
    }
}
