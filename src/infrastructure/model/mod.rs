//! Model and default-model repositories backed by generic storage

mod defaults_repository;
mod storage_repository;

pub use defaults_repository::StorageDefaultModelsRepository;
pub use storage_repository::StorageModelRepository;
