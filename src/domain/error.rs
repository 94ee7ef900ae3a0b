use thiserror::Error;

/// Core domain errors
///
/// `Clone` so a single failed construction can be handed to every caller
/// waiting on the same cache entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid model type: {model_type}")]
    InvalidType { model_type: String },

    #[error("Provider {provider} not compatible with {model_type} models")]
    IncompatibleProvider {
        provider: String,
        model_type: String,
    },

    #[error("No default model configured for type: {purpose}")]
    NoDefaultConfigured { purpose: String },

    #[error("Type mismatch: expected {expected} but got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Precondition violated: {message}")]
    PreconditionViolation { message: String },

    #[error("Initialization error: {message}")]
    Initialization { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_type(model_type: impl Into<String>) -> Self {
        Self::InvalidType {
            model_type: model_type.into(),
        }
    }

    pub fn incompatible_provider(
        provider: impl Into<String>,
        model_type: impl Into<String>,
    ) -> Self {
        Self::IncompatibleProvider {
            provider: provider.into(),
            model_type: model_type.into(),
        }
    }

    pub fn no_default_configured(purpose: impl Into<String>) -> Self {
        Self::NoDefaultConfigured {
            purpose: purpose.into(),
        }
    }

    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            message: message.into(),
        }
    }

    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Short label used for metrics and structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidType { .. } => "invalid_type",
            Self::IncompatibleProvider { .. } => "incompatible_provider",
            Self::NoDefaultConfigured { .. } => "no_default_configured",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::PreconditionViolation { .. } => "precondition_violation",
            Self::Initialization { .. } => "initialization",
            Self::Validation { .. } => "validation",
            Self::Conflict { .. } => "conflict",
            Self::Storage { .. } => "storage",
            Self::Configuration { .. } => "configuration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Model with ID model:x not found");
        assert_eq!(error.to_string(), "Not found: Model with ID model:x not found");
    }

    #[test]
    fn test_incompatible_provider_error() {
        let error = DomainError::incompatible_provider("acme", "language");
        assert_eq!(
            error.to_string(),
            "Provider acme not compatible with language models"
        );
        assert_eq!(error.kind(), "incompatible_provider");
    }

    #[test]
    fn test_no_default_configured_error() {
        let error = DomainError::no_default_configured("transformation");
        assert_eq!(
            error.to_string(),
            "No default model configured for type: transformation"
        );
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = DomainError::type_mismatch("embedding", "language");
        assert_eq!(
            error.to_string(),
            "Type mismatch: expected embedding but got language"
        );
    }
}
