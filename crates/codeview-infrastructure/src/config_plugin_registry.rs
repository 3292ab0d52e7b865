//! Plugin registry backed by configuration.

use async_trait::async_trait;
use tokio::sync::RwLock;

use codeview_core::error::{CodeviewError, Result};
use codeview_core::plugin::{Plugin, PluginRegistry};

/// Registry holding the plugins listed in `config.toml`, in file order.
///
/// The list can be edited at runtime (enable/disable, register) but is not
/// written back to disk.
pub struct ConfigPluginRegistry {
    plugins: RwLock<Vec<Plugin>>,
}

impl ConfigPluginRegistry {
    /// Creates a registry from already-loaded plugins. Every plugin is
    /// validated and ids must be unique.
    pub fn new(plugins: Vec<Plugin>) -> Result<Self> {
        for (idx, plugin) in plugins.iter().enumerate() {
            plugin.validate()?;
            if plugins[..idx].iter().any(|p| p.id == plugin.id) {
                return Err(CodeviewError::validation(format!(
                    "Duplicate plugin id '{}'",
                    plugin.id
                )));
            }
        }
        Ok(Self {
            plugins: RwLock::new(plugins),
        })
    }

    /// Appends a plugin at the end of the registry order.
    pub async fn register(&self, plugin: Plugin) -> Result<()> {
        plugin.validate()?;
        let mut plugins = self.plugins.write().await;
        if plugins.iter().any(|p| p.id == plugin.id) {
            return Err(CodeviewError::validation(format!(
                "Duplicate plugin id '{}'",
                plugin.id
            )));
        }
        plugins.push(plugin);
        Ok(())
    }

    /// Enables or disables a plugin.
    pub async fn set_enabled(&self, plugin_id: &str, enabled: bool) -> Result<()> {
        let mut plugins = self.plugins.write().await;
        let plugin = plugins
            .iter_mut()
            .find(|p| p.id == plugin_id)
            .ok_or_else(|| CodeviewError::not_found("Plugin", plugin_id))?;
        plugin.enabled = enabled;
        Ok(())
    }
}

#[async_trait]
impl PluginRegistry for ConfigPluginRegistry {
    async fn list_plugins(&self) -> Result<Vec<Plugin>> {
        Ok(self.plugins.read().await.clone())
    }
}
