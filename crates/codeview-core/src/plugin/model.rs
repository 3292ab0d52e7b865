//! Plugin domain models.

use serde::{Deserialize, Serialize};

use crate::document::PLUGIN_RESULT_DELIMITER;
use crate::error::{CodeviewError, Result};

/// A registered analysis plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Unique plugin identifier, used to look up executions.
    pub id: String,
    /// Display name; also embedded in plugin-result document ids.
    pub name: String,
    /// Disabled plugins are skipped when attaching results.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Plugin {
    /// Creates an enabled plugin after validating its name.
    ///
    /// Names end up inside plugin-result identifiers, so they must be
    /// non-empty and free of the `:` delimiter.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let plugin = Self {
            id: id.into(),
            name: name.into(),
            enabled: true,
        };
        plugin.validate()?;
        Ok(plugin)
    }

    /// Returns a copy with the `enabled` flag set.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Checks the invariants `Plugin::new` enforces. Used for plugins that
    /// arrive through deserialization.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CodeviewError::validation("Plugin id must not be empty"));
        }
        if self.name.is_empty() {
            return Err(CodeviewError::validation(format!(
                "Plugin '{}' has an empty name",
                self.id
            )));
        }
        if self.name.contains(PLUGIN_RESULT_DELIMITER) {
            return Err(CodeviewError::validation(format!(
                "Plugin name '{}' must not contain '{}'",
                self.name, PLUGIN_RESULT_DELIMITER
            )));
        }
        Ok(())
    }
}

/// One file's stored analysis output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutedFile {
    /// Path relative to the project root the plugin ran against.
    pub filename: String,
    /// Markdown produced for the file.
    pub content: String,
}

/// Everything one plugin produced in its last run over a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginExecution {
    #[serde(default)]
    pub files: Vec<ExecutedFile>,
    /// RFC 3339 timestamp of the run, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<String>,
}

impl PluginExecution {
    pub fn new(files: Vec<ExecutedFile>) -> Self {
        Self {
            files,
            executed_at: None,
        }
    }

    /// Finds the stored result for a project-relative path.
    pub fn find_file(&self, relative_path: &str) -> Option<&ExecutedFile> {
        self.files.iter().find(|f| f.filename == relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plugin_is_enabled() {
        let plugin = Plugin::new("p-1", "lint").unwrap();
        assert!(plugin.enabled);
        assert!(!plugin.with_enabled(false).enabled);
    }

    #[test]
    fn test_plugin_name_rejects_delimiter() {
        let err = Plugin::new("p-1", "lint:strict").unwrap_err();
        assert!(err.is_validation());
        assert!(Plugin::new("p-1", "").is_err());
        assert!(Plugin::new(" ", "lint").is_err());
    }

    #[test]
    fn test_enabled_defaults_when_missing() {
        let plugin: Plugin = serde_json::from_str(r#"{"id":"p","name":"lint"}"#).unwrap();
        assert!(plugin.enabled);
    }

    #[test]
    fn test_find_file_is_exact_match() {
        let execution = PluginExecution::new(vec![
            ExecutedFile {
                filename: "src/x.ts".to_string(),
                content: "# x".to_string(),
            },
            ExecutedFile {
                filename: "x.ts".to_string(),
                content: "# root x".to_string(),
            },
        ]);

        assert_eq!(execution.find_file("x.ts").unwrap().content, "# root x");
        assert!(execution.find_file("/x.ts").is_none());
    }
}
