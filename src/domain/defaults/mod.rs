//! Default model domain - per-purpose default selection

mod entity;
mod issue;
mod purpose;
mod repository;

pub use entity::{DefaultModels, DefaultModelsId, DEFAULT_MODELS_RECORD_ID};
pub use issue::DefaultModelIssue;
pub use purpose::ModelPurpose;
pub use repository::DefaultModelsRepository;

#[cfg(test)]
pub use repository::MockDefaultModelsRepository;
