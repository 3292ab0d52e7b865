//! Typed view of an open-document identifier.

use serde::{Deserialize, Serialize};

use super::identifier::DocumentId;
use crate::path::basename;

/// Title shown when no file name can be extracted from an identifier.
pub const UNKNOWN_FILE_TITLE: &str = "Unknown file";

/// What a tab renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Raw file content.
    Code,
    /// Markdown produced by a plugin for some file.
    PluginMarkdown,
}

/// Derived description of an open document. Never stored; rebuilt from the
/// identifier whenever it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
    pub id: DocumentId,
    pub title: String,
    pub kind: DocumentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
}

impl DocumentDescriptor {
    /// Resolves an identifier into a descriptor. Malformed plugin-result keys
    /// degrade to empty parts and the unknown-file title.
    pub fn resolve(id: &DocumentId) -> Self {
        match id.plugin_result_key() {
            Some(key) => Self {
                id: id.clone(),
                title: title_for(key.original_path),
                kind: DocumentKind::PluginMarkdown,
                original_path: Some(key.original_path.to_string()),
                plugin_name: Some(key.plugin_name.to_string()),
            },
            None => Self {
                id: id.clone(),
                title: title_for(id.as_str()),
                kind: DocumentKind::Code,
                original_path: None,
                plugin_name: None,
            },
        }
    }

    pub fn is_plugin_markdown(&self) -> bool {
        self.kind == DocumentKind::PluginMarkdown
    }
}

fn title_for(path: &str) -> String {
    match basename(path) {
        "" => UNKNOWN_FILE_TITLE.to_string(),
        name => name.to_string(),
    }
}

impl DocumentKind {
    /// Kind of the document behind `id`, without building a full descriptor.
    pub fn of(id: &DocumentId) -> Self {
        if id.is_plugin_result() {
            Self::PluginMarkdown
        } else {
            Self::Code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_code_file() {
        let desc = DocumentDescriptor::resolve(&DocumentId::new("/proj/src/main.rs"));
        assert_eq!(desc.title, "main.rs");
        assert_eq!(desc.kind, DocumentKind::Code);
        assert!(desc.original_path.is_none());
        assert!(desc.plugin_name.is_none());
    }

    #[test]
    fn test_resolve_plugin_result() {
        let id = DocumentId::plugin_result("lint", "/proj/src/x.ts");
        let desc = DocumentDescriptor::resolve(&id);
        assert_eq!(desc.title, "x.ts");
        assert_eq!(desc.kind, DocumentKind::PluginMarkdown);
        assert_eq!(desc.original_path.as_deref(), Some("/proj/src/x.ts"));
        assert_eq!(desc.plugin_name.as_deref(), Some("lint"));
    }

    #[test]
    fn test_unknown_title_fallbacks() {
        let dir = DocumentDescriptor::resolve(&DocumentId::new("/proj/src/"));
        assert_eq!(dir.title, UNKNOWN_FILE_TITLE);

        let malformed = DocumentDescriptor::resolve(&DocumentId::new("plugin_result:lint"));
        assert_eq!(malformed.title, UNKNOWN_FILE_TITLE);
        assert_eq!(malformed.kind, DocumentKind::PluginMarkdown);
        assert_eq!(malformed.original_path.as_deref(), Some(""));
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(DocumentKind::of(&DocumentId::new("a.rs")), DocumentKind::Code);
        assert_eq!(
            DocumentKind::of(&DocumentId::plugin_result("p", "a.rs")),
            DocumentKind::PluginMarkdown
        );
    }
}
