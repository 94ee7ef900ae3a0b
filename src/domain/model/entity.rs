//! Model entity and related types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_model_id, ModelValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Model identifier - non-empty record id without whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Create a new ModelId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ModelValidationError> {
        let id = id.into();
        validate_model_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh record id in the `model` table
    pub fn generate() -> Self {
        Self(format!("{}:{}", Model::TABLE, uuid::Uuid::new_v4().simple()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModelId {
    type Error = ModelValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for ModelId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Recognized model types, one per client capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Language,
    Embedding,
    SpeechToText,
    TextToSpeech,
}

impl ModelType {
    pub const ALL: [ModelType; 4] = [
        ModelType::Language,
        ModelType::Embedding,
        ModelType::SpeechToText,
        ModelType::TextToSpeech,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Language => "language",
            ModelType::Embedding => "embedding",
            ModelType::SpeechToText => "speech_to_text",
            ModelType::TextToSpeech => "text_to_speech",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = DomainError;

    /// `chat` is accepted as an alias for `language`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" | "chat" => Ok(ModelType::Language),
            "embedding" => Ok(ModelType::Embedding),
            "speech_to_text" => Ok(ModelType::SpeechToText),
            "text_to_speech" => Ok(ModelType::TextToSpeech),
            other => Err(DomainError::invalid_type(other)),
        }
    }
}

/// Persisted model record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    id: ModelId,

    /// Provider-side model name (e.g. "gpt-4o")
    name: String,

    /// Provider name as registered in the model registry
    provider: String,

    /// Raw type string; only interpreted when the model is resolved
    #[serde(rename = "type")]
    model_type: String,

    created: DateTime<Utc>,

    updated: DateTime<Utc>,
}

impl Model {
    /// Create a new model with a generated id
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        model_type: impl Into<String>,
    ) -> Self {
        Self::with_id(ModelId::generate(), name, provider, model_type)
    }

    /// Create a model with a caller-chosen id
    pub fn with_id(
        id: ModelId,
        name: impl Into<String>,
        provider: impl Into<String>,
        model_type: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            provider: provider.into(),
            model_type: model_type.into(),
            created: now,
            updated: now,
        }
    }

    pub fn id(&self) -> &ModelId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The persisted type string, as stored
    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    /// The recognized type of this model, or `InvalidType`
    pub fn kind(&self) -> Result<ModelType, DomainError> {
        self.model_type.parse()
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn set_provider(&mut self, provider: impl Into<String>) {
        self.provider = provider.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated = Utc::now();
    }
}

impl StorageEntity for Model {
    type Key = ModelId;
    const TABLE: &'static str = "model";

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_valid() {
        let id = ModelId::new("model:gpt4").unwrap();
        assert_eq!(id.as_str(), "model:gpt4");
    }

    #[test]
    fn test_model_id_empty() {
        assert!(ModelId::new("").is_err());
    }

    #[test]
    fn test_generated_ids_are_unique_record_ids() {
        let a = ModelId::generate();
        let b = ModelId::generate();

        assert!(a.as_str().starts_with("model:"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_model_type_parsing() {
        assert_eq!("language".parse::<ModelType>().unwrap(), ModelType::Language);
        assert_eq!("chat".parse::<ModelType>().unwrap(), ModelType::Language);
        assert_eq!(
            "speech_to_text".parse::<ModelType>().unwrap(),
            ModelType::SpeechToText
        );

        let err = "vision".parse::<ModelType>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidType { model_type } if model_type == "vision"));
    }

    #[test]
    fn test_model_type_round_trips_through_as_str() {
        for kind in ModelType::ALL {
            assert_eq!(kind.as_str().parse::<ModelType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_model_creation() {
        let model = Model::with_id(ModelId::new("m1").unwrap(), "gpt", "openai", "chat");

        assert_eq!(model.id().as_str(), "m1");
        assert_eq!(model.name(), "gpt");
        assert_eq!(model.provider(), "openai");
        assert_eq!(model.model_type(), "chat");
        assert_eq!(model.kind().unwrap(), ModelType::Language);
        assert_eq!(model.created(), model.updated());
    }

    #[test]
    fn test_unrecognized_type_is_kept_until_resolution() {
        let model = Model::new("whisper-1", "openai", "");
        assert_eq!(model.model_type(), "");
        assert!(matches!(model.kind(), Err(DomainError::InvalidType { .. })));
    }

    #[test]
    fn test_serialized_record_uses_type_field() {
        let model = Model::with_id(ModelId::new("m1").unwrap(), "gpt", "openai", "language");
        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["type"], "language");
        assert_eq!(json["id"], "m1");

        let back: Model = serde_json::from_value(json).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn test_set_name_touches_updated() {
        let mut model = Model::new("gpt-4", "openai", "language");
        let before = model.updated();

        model.set_name("gpt-4o");

        assert_eq!(model.name(), "gpt-4o");
        assert!(model.updated() >= before);
    }
}
