//! Infrastructure services

mod model_manager;
mod seed;

pub use model_manager::ModelManager;
pub use seed::{SeedFile, SeedModel, SeedReport, SeedService};
