//! Problems found when checking configured defaults against stored models

use std::fmt;

use serde::Serialize;

use super::ModelPurpose;
use crate::domain::ModelType;

/// A configured default that would fail to resolve
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum DefaultModelIssue {
    /// No model record with the configured id
    MissingModel {
        purpose: ModelPurpose,
        model_id: String,
    },
    /// The model's persisted type is not a recognized type
    UnrecognizedType {
        purpose: ModelPurpose,
        model_id: String,
        model_type: String,
    },
    /// The model is of a type that cannot serve the purpose
    IncompatibleType {
        purpose: ModelPurpose,
        model_id: String,
        expected: ModelType,
        actual: ModelType,
    },
    /// No constructor is registered for the model's provider
    UnsupportedProvider {
        purpose: ModelPurpose,
        model_id: String,
        provider: String,
    },
}

impl DefaultModelIssue {
    pub fn purpose(&self) -> ModelPurpose {
        match self {
            Self::MissingModel { purpose, .. }
            | Self::UnrecognizedType { purpose, .. }
            | Self::IncompatibleType { purpose, .. }
            | Self::UnsupportedProvider { purpose, .. } => *purpose,
        }
    }
}

impl fmt::Display for DefaultModelIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingModel { purpose, model_id } => {
                write!(f, "{}: model {} does not exist", purpose, model_id)
            }
            Self::UnrecognizedType {
                purpose,
                model_id,
                model_type,
            } => write!(
                f,
                "{}: model {} has unrecognized type '{}'",
                purpose, model_id, model_type
            ),
            Self::IncompatibleType {
                purpose,
                model_id,
                expected,
                actual,
            } => write!(
                f,
                "{}: model {} is a {} model, expected {}",
                purpose, model_id, actual, expected
            ),
            Self::UnsupportedProvider {
                purpose,
                model_id,
                provider,
            } => write!(
                f,
                "{}: provider {} of model {} is not registered",
                purpose, provider, model_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = DefaultModelIssue::IncompatibleType {
            purpose: ModelPurpose::Embedding,
            model_id: "m1".to_string(),
            expected: ModelType::Embedding,
            actual: ModelType::Language,
        };

        assert_eq!(
            issue.to_string(),
            "embedding: model m1 is a language model, expected embedding"
        );
        assert_eq!(issue.purpose(), ModelPurpose::Embedding);
    }
}
