//! Command implementations

use std::fmt::Write;

use anyhow::bail;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{DefaultModelIssue, DefaultModels, Model, ModelInstance, ModelParams, ModelPurpose};
use crate::infrastructure::logging;
use crate::AppState;

use super::{Cli, Command};

/// Load configuration, wire up the application and run the command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    if let Some(seed) = cli.seed {
        config.seed_file = Some(seed);
    }

    let state = crate::create_app_state_with_config(&config).await?;
    execute(&state, cli.command).await
}

async fn execute(state: &AppState, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Defaults => {
            let defaults = state.manager.defaults().await?;
            print!("{}", render_defaults(&defaults));
        }
        Command::Models { model_type } => {
            let models = state.manager.get_models_by_type(&model_type).await?;
            print!("{}", render_models(&models));
        }
        Command::Resolve { purpose, params } => {
            let params = params
                .iter()
                .map(|pair| ModelParams::parse_pair(pair))
                .collect::<Result<ModelParams, _>>()?;

            let instance = state
                .manager
                .get_default_model_named(&purpose, &params)
                .await?;
            print!("{}", render_instance(&purpose, &instance));
        }
        Command::Check => {
            let issues = state.manager.validate_defaults().await?;
            print!("{}", render_issues(&issues));

            if !issues.is_empty() {
                bail!("{} default model issue(s) found", issues.len());
            }
            info!("Default models are valid");
        }
    }

    Ok(())
}

fn render_defaults(defaults: &DefaultModels) -> String {
    let mut out = String::new();

    for purpose in ModelPurpose::ALL {
        let line = match (defaults.configured(purpose), defaults.resolve(purpose)) {
            (Some(id), _) => id.to_string(),
            (None, Some(id)) => format!("{} (from chat)", id),
            (None, None) => "-".to_string(),
        };
        let _ = writeln!(out, "{:<16} {}", purpose.as_str(), line);
    }

    out
}

fn render_models(models: &[Model]) -> String {
    let mut out = String::new();

    for model in models {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            model.id(),
            model.provider(),
            model.name()
        );
    }

    out
}

fn render_instance(purpose: &str, instance: &ModelInstance) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "purpose:  {}", purpose);
    let _ = writeln!(out, "type:     {}", instance.model_type());
    let _ = writeln!(out, "provider: {}", instance.provider());
    let _ = writeln!(out, "model:    {}", instance.model_name());
    if !instance.params().is_empty() {
        let _ = writeln!(out, "params:   {}", instance.params());
    }

    out
}

fn render_issues(issues: &[DefaultModelIssue]) -> String {
    let mut out = String::new();

    for issue in issues {
        let _ = writeln!(out, "{}", issue);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ModelId, ModelType};
    use crate::infrastructure::registry::ProviderModel;
    use std::sync::Arc;

    #[test]
    fn test_render_defaults_marks_fallback() {
        let defaults = DefaultModels::new()
            .with(ModelPurpose::Chat, "m1")
            .with(ModelPurpose::Embedding, "m-embed");

        let out = render_defaults(&defaults);

        let line = |purpose: &str, value: &str| format!("{:<16} {}\n", purpose, value);
        assert!(out.contains(&line("chat", "m1")));
        assert!(out.contains(&line("transformation", "m1 (from chat)")));
        assert!(out.contains(&line("embedding", "m-embed")));
        assert!(out.contains(&line("large_context", "-")));
    }

    #[test]
    fn test_render_models() {
        let models = vec![Model::with_id(
            ModelId::new("m1").unwrap(),
            "gpt",
            "openai",
            "language",
        )];

        assert_eq!(render_models(&models), "m1\topenai\tgpt\n");
    }

    #[test]
    fn test_render_instance() {
        let params = ModelParams::new().with("temperature", 0.2);
        let model =
            ProviderModel::new("openai", "gpt", ModelType::Language, &params).unwrap();
        let instance = ModelInstance::Language(Arc::new(model));

        let out = render_instance("chat", &instance);

        assert!(out.contains("type:     language\n"));
        assert!(out.contains("model:    gpt\n"));
        assert!(out.contains("params:   "));
    }

    #[tokio::test]
    async fn test_check_fails_on_issues() {
        let state = crate::create_app_state().await.unwrap();
        state
            .manager
            .update_defaults(DefaultModels::new().with(ModelPurpose::Chat, "model:missing"))
            .await
            .unwrap();

        let result = execute(&state, Command::Check).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_resolve_rejects_malformed_param() {
        let state = crate::create_app_state().await.unwrap();

        let result = execute(
            &state,
            Command::Resolve {
                purpose: "chat".to_string(),
                params: vec!["temperature".to_string()],
            },
        )
        .await;
        assert!(result.is_err());
    }
}
