//! Seed service - imports models and defaults from a TOML file
//!
//! ```toml
//! [[models]]
//! id = "model:gpt"
//! name = "gpt-4o-mini"
//! provider = "openai"
//! type = "language"
//!
//! [defaults]
//! default_chat_model = "model:gpt"
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{
    validate_model_fields, DefaultModels, DefaultModelsRepository, DomainError, Model, ModelId,
    ModelRepository,
};

/// A model entry of a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedModel {
    /// Generated when omitted
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub provider: String,
    #[serde(rename = "type")]
    pub model_type: String,
}

/// Parsed seed file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub models: Vec<SeedModel>,
    #[serde(default)]
    pub defaults: Option<DefaultModels>,
}

impl SeedFile {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        toml::from_str(content)
            .map_err(|e| DomainError::configuration(format!("Invalid seed file: {}", e)))
    }
}

/// Outcome of a seed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub models_created: usize,
    pub models_skipped: usize,
    pub defaults_updated: bool,
}

/// Seed service
#[derive(Debug)]
pub struct SeedService {
    models: Arc<dyn ModelRepository>,
    defaults: Arc<dyn DefaultModelsRepository>,
}

impl SeedService {
    pub fn new(
        models: Arc<dyn ModelRepository>,
        defaults: Arc<dyn DefaultModelsRepository>,
    ) -> Self {
        Self { models, defaults }
    }

    /// Read and import a seed file
    pub async fn import_seed(&self, path: impl AsRef<Path>) -> Result<SeedReport, DomainError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read seed file {}: {}",
                path.display(),
                e
            ))
        })?;

        let report = self.import(SeedFile::parse(&content)?).await?;

        info!(
            path = %path.display(),
            created = report.models_created,
            skipped = report.models_skipped,
            defaults_updated = report.defaults_updated,
            "Seed file imported"
        );

        Ok(report)
    }

    /// Insert missing models and merge the configured defaults
    ///
    /// Models whose id already exists are left untouched. Default fields
    /// absent from the seed keep their stored value.
    pub async fn import(&self, seed: SeedFile) -> Result<SeedReport, DomainError> {
        let mut report = SeedReport::default();

        for entry in seed.models {
            validate_model_fields(&entry.name, &entry.provider, &entry.model_type)
                .map_err(|e| DomainError::validation(e.to_string()))?;

            let model = match entry.id {
                Some(id) => {
                    let id = ModelId::new(id).map_err(|e| DomainError::validation(e.to_string()))?;

                    if self.models.get(&id).await?.is_some() {
                        debug!(model_id = %id, "Seed model already exists, skipping");
                        report.models_skipped += 1;
                        continue;
                    }

                    Model::with_id(id, entry.name, entry.provider, entry.model_type)
                }
                None => Model::new(entry.name, entry.provider, entry.model_type),
            };

            let created = self.models.create(model).await?;
            debug!(model_id = %created.id(), "Seed model created");
            report.models_created += 1;
        }

        if let Some(seeded) = seed.defaults {
            let mut defaults = self.defaults.load().await?;
            for (purpose, model_id) in seeded.entries() {
                defaults.set(purpose, Some(model_id.to_string()));
            }

            self.defaults.save(defaults).await?;
            report.defaults_updated = true;
        }

        Ok(report)
    }
}
