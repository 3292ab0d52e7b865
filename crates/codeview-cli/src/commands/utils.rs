use anyhow::{Context, Result};
use codeview_infrastructure::{CodeviewPaths, ConfigService};
use std::path::{Path, PathBuf};

/// Builds the config service for `--config`, or for the default location.
pub fn config_service(path: Option<&Path>) -> Result<ConfigService> {
    match path {
        Some(path) => Ok(ConfigService::with_path(path)),
        None => ConfigService::new().context("Failed to locate the configuration directory"),
    }
}

/// Resolves a file named in the configuration against the directory holding
/// the configuration file. Absolute names are kept as they are.
pub fn config_relative(config: &ConfigService, name: &str) -> Result<PathBuf> {
    match config.path().parent() {
        Some(dir) => Ok(dir.join(name)),
        None => CodeviewPaths::config_relative(name)
            .with_context(|| format!("Failed to resolve {}", name)),
    }
}
