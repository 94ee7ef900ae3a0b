//! Model instance domain - capability traits, constructed instances and
//! their construction parameters

mod client;
#[allow(clippy::module_inception)]
mod instance;
mod params;

pub use client::{EmbeddingModel, LanguageModel, ModelClient, SpeechToTextModel, TextToSpeechModel};
pub use instance::ModelInstance;
pub use params::ModelParams;
