use anyhow::{Context, Result};
use clap::Args;
use codeview_application::ModelConfigService;
use codeview_core::model_config::{
    DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_MAX_CONTEXT_TOKENS, DEFAULT_MAX_OUTPUT_TOKENS,
    DEFAULT_TEMPERATURE, NewModelConfig,
};
use codeview_infrastructure::{ConfigService, TomlModelRepository};
use std::sync::Arc;

use super::utils::config_relative;

#[derive(Args)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    name: String,
    /// API key sent to the endpoint
    #[arg(long)]
    api_key: String,
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_CONTEXT_TOKENS)]
    max_context_tokens: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_OUTPUT_TOKENS)]
    max_output_tokens: u32,
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: u32,
}

fn service(config: &ConfigService) -> Result<ModelConfigService> {
    let loaded = config
        .get_config()
        .with_context(|| format!("Failed to load {}", config.path().display()))?;
    let path = config_relative(config, &loaded.storage.models_file)?;
    let repository = TomlModelRepository::with_path(path);
    Ok(ModelConfigService::new(Arc::new(repository)))
}

pub async fn add(config: &ConfigService, args: AddArgs) -> Result<()> {
    let form = NewModelConfig {
        name: args.name,
        api_key: args.api_key,
        base_url: args.base_url,
        temperature: args.temperature,
        max_context_tokens: args.max_context_tokens,
        max_output_tokens: args.max_output_tokens,
        concurrency: args.concurrency,
    };

    let model = service(config)?.add_model(form).await?;
    println!("✓ Added model '{}' ({})", model.name, model.id);
    Ok(())
}

pub async fn list(config: &ConfigService, enabled_only: bool) -> Result<()> {
    let service = service(config)?;
    let models = if enabled_only {
        service.list_enabled_models().await?
    } else {
        service.list_models().await?
    };

    if models.is_empty() {
        println!("No models configured");
        return Ok(());
    }
    for model in models {
        let status = if model.enabled { "enabled" } else { "disabled" };
        println!(
            "{}  {}  {}  temperature={} concurrency={} ({})",
            model.id, model.name, model.base_url, model.temperature, model.concurrency, status
        );
    }
    Ok(())
}
