//! Tab projection: the renderable tab strip derived from open documents.

use serde::{Deserialize, Serialize};

use crate::activation::{ActivationState, code_tab_id};
use crate::document::{DocumentDescriptor, DocumentKind, OpenDocuments};

/// One entry of the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(flatten)]
    pub descriptor: DocumentDescriptor,
    pub is_active: bool,
}

/// Builds the tab strip in opening order.
///
/// In split mode a code tab is highlighted only when it is both the primary
/// document and the code tab (the first open code document); a plugin-result
/// tab is highlighted when it fills the secondary slot. In single-pane mode
/// exactly the active document is highlighted. Empty ids never produce a tab.
pub fn project_tabs(
    documents: &OpenDocuments,
    activation: &ActivationState,
    is_split: bool,
) -> Vec<Tab> {
    let code_tab = code_tab_id(documents);
    let active = activation.active();
    let secondary = activation.resolved_secondary(documents, is_split);

    documents
        .iter()
        .filter(|id| !id.is_empty())
        .map(|id| {
            let descriptor = DocumentDescriptor::resolve(id);
            let is_active = if is_split {
                match descriptor.kind {
                    DocumentKind::Code => active == Some(id) && code_tab == Some(id),
                    DocumentKind::PluginMarkdown => secondary == Some(id),
                }
            } else {
                active == Some(id)
            };
            Tab {
                descriptor,
                is_active,
            }
        })
        .collect()
}
