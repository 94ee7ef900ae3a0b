//! Capability traits implemented by model clients

use std::fmt::Debug;

use serde_json::Value;

use super::ModelParams;

/// Common surface of every constructed model client
pub trait ModelClient: Send + Sync + Debug {
    /// Provider the client talks to
    fn provider(&self) -> &str;

    /// Provider-side model name
    fn model_name(&self) -> &str;

    /// Parameters the client was constructed with
    fn params(&self) -> &ModelParams;
}

/// Chat / completion capable model
pub trait LanguageModel: ModelClient {
    fn temperature(&self) -> Option<f64> {
        self.params().get_f64("temperature")
    }

    fn max_tokens(&self) -> Option<u64> {
        self.params().get_u64("max_tokens")
    }

    /// Whether the caller asked for structured (JSON) output
    fn structured(&self) -> bool {
        self.params()
            .get("structured")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Text embedding model
pub trait EmbeddingModel: ModelClient {
    fn dimensions(&self) -> Option<u64> {
        self.params().get_u64("dimensions")
    }
}

/// Audio transcription model
pub trait SpeechToTextModel: ModelClient {
    /// Expected spoken language, if pinned
    fn language(&self) -> Option<&str> {
        self.params().get_str("language")
    }
}

/// Speech synthesis model
pub trait TextToSpeechModel: ModelClient {
    fn voice(&self) -> Option<&str> {
        self.params().get_str("voice")
    }
}
