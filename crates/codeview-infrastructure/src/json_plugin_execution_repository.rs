//! Plugin execution repository implementation.
//!
//! Stores plugin results as a JSON object keyed by plugin id inside the
//! project directory.
//!
//! File location: `{project_root}/.codeview/plugin_executions.json` by default.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use codeview_core::config::DEFAULT_EXECUTION_DATA_FILE;
use codeview_core::error::{CodeviewError, Result};
use codeview_core::plugin::{PluginExecution, PluginExecutionRepository};

use crate::paths::CodeviewPaths;

#[derive(Default)]
struct LoadedProject {
    root: Option<PathBuf>,
    executions: HashMap<String, PluginExecution>,
}

/// File-based execution repository scoped to one project at a time.
pub struct JsonPluginExecutionRepository {
    /// Data file location relative to the project root.
    data_file: String,
    state: RwLock<LoadedProject>,
}

impl JsonPluginExecutionRepository {
    pub fn new() -> Self {
        Self::with_data_file(DEFAULT_EXECUTION_DATA_FILE)
    }

    /// Uses a custom data file location relative to each project root.
    pub fn with_data_file(data_file: impl Into<String>) -> Self {
        Self {
            data_file: data_file.into(),
            state: RwLock::new(LoadedProject::default()),
        }
    }

    /// Root of the project currently loaded, if any.
    pub async fn project_root(&self) -> Option<PathBuf> {
        self.state.read().await.root.clone()
    }

    /// Writes `executions` to the data file of `project_root`.
    ///
    /// Used by tooling that produces results; the viewer itself only reads.
    pub async fn save(
        &self,
        project_root: &str,
        executions: &HashMap<String, PluginExecution>,
    ) -> Result<()> {
        let path = self.data_path(project_root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CodeviewError::io(format!("Failed to create directory: {}", e)))?;
        }

        let serialized = serde_json::to_string_pretty(executions)?;
        fs::write(&path, serialized)
            .await
            .map_err(|e| CodeviewError::io(format!("Failed to write {:?}: {}", path, e)))?;
        Ok(())
    }

    fn data_path(&self, project_root: &str) -> PathBuf {
        CodeviewPaths::execution_data_file(Path::new(project_root), &self.data_file)
    }

    async fn load(path: &Path) -> Result<HashMap<String, PluginExecution>> {
        if !path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| CodeviewError::io(format!("Failed to read {:?}: {}", path, e)))?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }

        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for JsonPluginExecutionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginExecutionRepository for JsonPluginExecutionRepository {
    async fn initialize(&self, project_root: &str) -> Result<()> {
        let path = self.data_path(project_root);
        let executions = Self::load(&path).await?;

        tracing::info!(
            target: "plugin_execution",
            "Loaded {} plugin executions from {:?}",
            executions.len(),
            path
        );

        let mut state = self.state.write().await;
        state.root = Some(PathBuf::from(project_root));
        state.executions = executions;
        Ok(())
    }

    async fn get_execution(&self, plugin_id: &str) -> Result<Option<PluginExecution>> {
        Ok(self.state.read().await.executions.get(plugin_id).cloned())
    }
}
