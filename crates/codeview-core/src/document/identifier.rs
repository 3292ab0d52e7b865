//! Open-document identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural marker that prefixes every synthetic plugin-result identifier.
pub const PLUGIN_RESULT_PREFIX: &str = "plugin_result:";

/// Separator between the plugin name and the original file path.
pub const PLUGIN_RESULT_DELIMITER: char = ':';

/// Identifier of a document occupying a tab.
///
/// Either a plain file path or a synthetic plugin-result key of the form
/// `plugin_result:{plugin_name}:{original_path}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

/// The two parts encoded in a plugin-result identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginResultKey<'a> {
    pub plugin_name: &'a str,
    pub original_path: &'a str,
}

impl DocumentId {
    /// Wraps a raw identifier (file path or already-encoded key).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Builds the synthetic identifier for a plugin's result on `original_path`.
    ///
    /// `plugin_name` must not contain the delimiter; `Plugin::new` enforces
    /// that for every registered plugin. The path is stored verbatim.
    pub fn plugin_result(plugin_name: &str, original_path: &str) -> Self {
        Self(format!(
            "{PLUGIN_RESULT_PREFIX}{plugin_name}{PLUGIN_RESULT_DELIMITER}{original_path}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this identifier carries the plugin-result marker.
    pub fn is_plugin_result(&self) -> bool {
        self.0.starts_with(PLUGIN_RESULT_PREFIX)
    }

    /// Decodes the plugin name and original path of a plugin-result key.
    ///
    /// Only the first delimiter after the marker separates the two parts, so
    /// the original path may itself contain `:`. A key with no delimiter
    /// decodes to the whole remainder as plugin name and an empty path.
    /// Returns `None` for plain file identifiers.
    pub fn plugin_result_key(&self) -> Option<PluginResultKey<'_>> {
        let rest = self.0.strip_prefix(PLUGIN_RESULT_PREFIX)?;
        let (plugin_name, original_path) = rest
            .split_once(PLUGIN_RESULT_DELIMITER)
            .unwrap_or((rest, ""));
        Some(PluginResultKey {
            plugin_name,
            original_path,
        })
    }

    /// The filesystem path behind this document: the identifier itself for
    /// files, the original path for plugin results.
    pub fn source_path(&self) -> &str {
        match self.plugin_result_key() {
            Some(key) => key.original_path,
            None => &self.0,
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for DocumentId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
