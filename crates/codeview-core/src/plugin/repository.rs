//! Plugin registry and execution repository traits.

use async_trait::async_trait;

use super::model::{Plugin, PluginExecution};
use crate::error::Result;

/// Source of the registered plugins.
#[async_trait]
pub trait PluginRegistry: Send + Sync {
    /// Lists all plugins in registry order, enabled or not.
    async fn list_plugins(&self) -> Result<Vec<Plugin>>;

    /// Lists only enabled plugins, keeping registry order.
    async fn enabled_plugins(&self) -> Result<Vec<Plugin>> {
        Ok(self
            .list_plugins()
            .await?
            .into_iter()
            .filter(|p| p.enabled)
            .collect())
    }
}

/// Read access to previously produced plugin results.
///
/// # Implementation Notes
///
/// Results are scoped to a project. `initialize` switches the repository to
/// a project root; `get_execution` answers from whatever project was last
/// initialized.
#[async_trait]
pub trait PluginExecutionRepository: Send + Sync {
    /// Loads the stored executions for the project at `project_root`.
    async fn initialize(&self, project_root: &str) -> Result<()>;

    /// Returns the last execution of `plugin_id`, if it ever ran.
    async fn get_execution(&self, plugin_id: &str) -> Result<Option<PluginExecution>>;
}
