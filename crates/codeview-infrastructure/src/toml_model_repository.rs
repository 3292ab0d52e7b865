//! TOML-based ModelRepository implementation

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use codeview_core::config::DEFAULT_MODELS_FILE;
use codeview_core::error::{CodeviewError, Result};
use codeview_core::model_config::{ModelConfig, ModelRepository};

use crate::paths::CodeviewPaths;

/// On-disk layout: a list of `[[models]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ModelsFile {
    #[serde(default)]
    models: Vec<ModelConfig>,
}

/// A repository storing model configurations in a TOML file.
///
/// Writes are serialized through a mutex so concurrent `add` calls cannot
/// lose each other's records.
pub struct TomlModelRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TomlModelRepository {
    /// Creates a repository at the default path (~/.config/codeview/models.toml).
    pub fn new() -> Result<Self> {
        let path = CodeviewPaths::config_relative(DEFAULT_MODELS_FILE)
            .map_err(|e| CodeviewError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository with a custom path (for testing)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<ModelsFile> {
        if !self.path.exists() {
            return Ok(ModelsFile::default());
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            CodeviewError::io(format!("Failed to read models file at {:?}: {}", self.path, e))
        })?;
        if content.trim().is_empty() {
            return Ok(ModelsFile::default());
        }

        Ok(toml::from_str(&content)?)
    }

    async fn write_file(&self, file: &ModelsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CodeviewError::io(format!("Failed to create directory: {}", e)))?;
        }

        let serialized = toml::to_string_pretty(file)?;
        fs::write(&self.path, serialized).await.map_err(|e| {
            CodeviewError::io(format!("Failed to write models file at {:?}: {}", self.path, e))
        })?;
        Ok(())
    }
}

#[async_trait]
impl ModelRepository for TomlModelRepository {
    async fn add(&self, config: ModelConfig) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut file = self.read_file().await?;
        if file.models.iter().any(|m| m.id == config.id) {
            return Err(CodeviewError::validation(format!(
                "Model '{}' already exists",
                config.id
            )));
        }

        tracing::info!(target: "model_config", "Adding model '{}'", config.name);
        file.models.push(config);
        self.write_file(&file).await
    }

    async fn list_all(&self) -> Result<Vec<ModelConfig>> {
        Ok(self.read_file().await?.models)
    }
}
