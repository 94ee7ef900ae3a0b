//! CLI module for notebook models
//!
//! Provides subcommands for inspecting the model configuration:
//! - `defaults`: show the configured default models
//! - `models <type>`: list stored models of a type
//! - `resolve <purpose>`: resolve and describe a default model
//! - `check`: validate the default models against the stored models

pub mod commands;

use clap::{Parser, Subcommand};

/// Notebook Models - registry and cache for the notebook's AI models
#[derive(Parser)]
#[command(name = "notebook-models")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Seed file to import before running the command (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the configured default models
    Defaults,

    /// List stored models of a type
    Models {
        /// Model type, e.g. language, embedding, speech_to_text
        model_type: String,
    },

    /// Resolve the default model for a purpose
    Resolve {
        /// Purpose, e.g. chat, transformation, embedding
        purpose: String,

        /// Construction parameter as key=value (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Validate the default models, exiting non-zero on issues
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_with_params() {
        let cli = Cli::try_parse_from([
            "notebook-models",
            "--seed",
            "seed.toml",
            "resolve",
            "chat",
            "--param",
            "temperature=0.2",
            "--param",
            "max_tokens=256",
        ])
        .unwrap();

        assert_eq!(cli.seed.as_deref(), Some("seed.toml"));
        match cli.command {
            Command::Resolve { purpose, params } => {
                assert_eq!(purpose, "chat");
                assert_eq!(params, vec!["temperature=0.2", "max_tokens=256"]);
            }
            _ => panic!("expected resolve command"),
        }
    }

    #[test]
    fn test_models_requires_type() {
        assert!(Cli::try_parse_from(["notebook-models", "models"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
