//! Model domain - persisted model records

mod entity;
mod repository;
mod validation;

pub use entity::{Model, ModelId, ModelType};
pub use repository::ModelRepository;
pub use validation::{
    validate_model_fields, validate_model_id, ModelValidationError, MAX_MODEL_ID_LENGTH,
};

#[cfg(test)]
pub use repository::MockModelRepository;
