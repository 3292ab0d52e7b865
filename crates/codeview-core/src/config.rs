//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default so a missing or partial file is valid.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plugin::Plugin;
use crate::split::SplitLayout;

/// Default location of the plugin execution data, relative to a project root.
pub const DEFAULT_EXECUTION_DATA_FILE: &str = ".codeview/plugin_executions.json";

/// Default name of the model configuration file inside the config directory.
pub const DEFAULT_MODELS_FILE: &str = "models.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct CodeviewConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Plugins in registry order.
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

/// Initial state of the viewer surface.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ViewConfig {
    #[serde(default)]
    pub split: bool,
    #[serde(default = "default_split_sizes")]
    pub split_sizes: [f32; 2],
}

fn default_split_sizes() -> [f32; 2] {
    [50.0, 50.0]
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            split: false,
            split_sizes: default_split_sizes(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_execution_data_file")]
    pub execution_data_file: String,
    #[serde(default = "default_models_file")]
    pub models_file: String,
}

fn default_execution_data_file() -> String {
    DEFAULT_EXECUTION_DATA_FILE.to_string()
}

fn default_models_file() -> String {
    DEFAULT_MODELS_FILE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            execution_data_file: default_execution_data_file(),
            models_file: default_models_file(),
        }
    }
}

impl ViewConfig {
    /// The layout the viewer starts with.
    pub fn layout(&self) -> Result<SplitLayout> {
        let mut layout = SplitLayout::new(self.split);
        layout.set_sizes(self.split_sizes)?;
        Ok(layout)
    }
}

impl CodeviewConfig {
    /// Rejects plugins whose names could not be embedded in document ids, and
    /// pane sizes the layout would refuse.
    pub fn validate(&self) -> Result<()> {
        SplitLayout::validate_sizes(self.view.split_sizes)?;
        self.plugins.iter().try_for_each(Plugin::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: CodeviewConfig = toml::from_str("").unwrap();
        assert_eq!(config, CodeviewConfig::default());
        assert_eq!(config.storage.execution_data_file, ".codeview/plugin_executions.json");
        assert_eq!(config.view.split_sizes, [50.0, 50.0]);
    }

    #[test]
    fn test_parse_plugins_in_order() {
        let config: CodeviewConfig = toml::from_str(
            r#"
[view]
split = true

[[plugins]]
id = "p-lint"
name = "lint"

[[plugins]]
id = "p-review"
name = "review"
enabled = false
"#,
        )
        .unwrap();

        assert!(config.view.split);
        assert_eq!(config.plugins.len(), 2);
        assert_eq!(config.plugins[0].name, "lint");
        assert!(config.plugins[0].enabled);
        assert!(!config.plugins[1].enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_view_layout() {
        let config: CodeviewConfig = toml::from_str(
            r#"
[view]
split = true
split_sizes = [40.0, 60.0]
"#,
        )
        .unwrap();
        let layout = config.view.layout().unwrap();
        assert!(layout.is_split);
        assert_eq!(layout.sizes, [40.0, 60.0]);

        let mut narrow = config.clone();
        narrow.view.split_sizes = [10.0, 90.0];
        assert!(narrow.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_validate_rejects_bad_plugin_name() {
        let mut config = CodeviewConfig::default();
        config.plugins.push(Plugin {
            id: "p".to_string(),
            name: "a:b".to_string(),
            enabled: true,
        });
        assert!(config.validate().is_err());
    }
}
