//! Model validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for model IDs
pub const MAX_MODEL_ID_LENGTH: usize = 255;

/// Record ids are `table:key` style strings; whitespace and control characters are rejected
static MODEL_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s\p{Cc}]+$").unwrap());

/// Model validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ModelValidationError {
    /// Model ID is empty
    EmptyId,
    /// Model ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// Model ID contains whitespace or control characters
    InvalidIdFormat { id: String },
    /// Provider-side model name is empty
    EmptyName,
    /// Provider name is empty
    EmptyProvider,
    /// Model type is empty
    EmptyType,
}

impl fmt::Display for ModelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Model ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(f, "Model ID too long: {} characters (max {})", length, max)
            }
            Self::InvalidIdFormat { id } => {
                write!(
                    f,
                    "Invalid model ID format '{}': must not contain whitespace",
                    id
                )
            }
            Self::EmptyName => write!(f, "Model name cannot be empty"),
            Self::EmptyProvider => write!(f, "Model provider cannot be empty"),
            Self::EmptyType => write!(f, "Model type cannot be empty"),
        }
    }
}

impl std::error::Error for ModelValidationError {}

/// Validate a model ID
pub fn validate_model_id(id: &str) -> Result<(), ModelValidationError> {
    if id.is_empty() {
        return Err(ModelValidationError::EmptyId);
    }

    if id.len() > MAX_MODEL_ID_LENGTH {
        return Err(ModelValidationError::IdTooLong {
            length: id.len(),
            max: MAX_MODEL_ID_LENGTH,
        });
    }

    if !MODEL_ID_PATTERN.is_match(id) {
        return Err(ModelValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}

/// Validate the descriptive fields of a model record
///
/// The type string is only checked for presence; unrecognized types are
/// persisted and rejected when the model is resolved.
pub fn validate_model_fields(
    name: &str,
    provider: &str,
    model_type: &str,
) -> Result<(), ModelValidationError> {
    if name.trim().is_empty() {
        return Err(ModelValidationError::EmptyName);
    }

    if provider.trim().is_empty() {
        return Err(ModelValidationError::EmptyProvider);
    }

    if model_type.trim().is_empty() {
        return Err(ModelValidationError::EmptyType);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_model_ids() {
        assert!(validate_model_id("m1").is_ok());
        assert!(validate_model_id("model:abc123").is_ok());
        assert!(validate_model_id("model:⟨gpt-4o⟩").is_ok());
        assert!(validate_model_id("openai/gpt-4o-mini").is_ok());
    }

    #[test]
    fn test_invalid_model_ids() {
        assert!(matches!(
            validate_model_id(""),
            Err(ModelValidationError::EmptyId)
        ));

        let long_id = "a".repeat(256);
        assert!(matches!(
            validate_model_id(&long_id),
            Err(ModelValidationError::IdTooLong { .. })
        ));

        assert!(matches!(
            validate_model_id("model: 1"),
            Err(ModelValidationError::InvalidIdFormat { .. })
        ));
        assert!(matches!(
            validate_model_id("model\t1"),
            Err(ModelValidationError::InvalidIdFormat { .. })
        ));
    }

    #[test]
    fn test_max_length_model_id() {
        let max_id = "a".repeat(MAX_MODEL_ID_LENGTH);
        assert!(validate_model_id(&max_id).is_ok());
    }

    #[test]
    fn test_model_fields_validation() {
        assert!(validate_model_fields("gpt-4o", "openai", "language").is_ok());
        assert!(validate_model_fields("gpt-4o", "openai", "hologram").is_ok());

        assert_eq!(
            validate_model_fields(" ", "openai", "language"),
            Err(ModelValidationError::EmptyName)
        );
        assert_eq!(
            validate_model_fields("gpt-4o", "", "language"),
            Err(ModelValidationError::EmptyProvider)
        );
        assert_eq!(
            validate_model_fields("gpt-4o", "openai", ""),
            Err(ModelValidationError::EmptyType)
        );
    }
}
