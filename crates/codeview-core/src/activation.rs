//! Activation state machine.
//!
//! Tracks which document is active in single-pane mode and which two
//! documents fill the panes in split mode. Only the explicitly chosen ids are
//! stored; everything else (the code tab, the default secondary document,
//! whether a stored id is still open) is recomputed from the open-document set
//! on every read.

use serde::{Deserialize, Serialize};

use crate::document::{DocumentDescriptor, DocumentId, DocumentKind, OpenDocuments};

/// Explicitly chosen active documents.
///
/// `active` doubles as the single-pane active document and the split-mode
/// primary slot. `secondary` is the split-mode override for the right pane.
/// Stored ids may dangle after their document is closed; they then simply
/// match no tab until the next activation event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationState {
    active: Option<DocumentId>,
    secondary: Option<DocumentId>,
}

/// Which slot a tab click landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivatedSlot {
    Active,
    Secondary,
}

/// Documents the layout renderer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum PaneTargets {
    Single {
        active: Option<DocumentId>,
    },
    Split {
        primary: Option<DocumentId>,
        secondary: Option<DocumentId>,
    },
}

impl ActivationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-pane active document / split-mode primary slot.
    pub fn active(&self) -> Option<&DocumentId> {
        self.active.as_ref()
    }

    /// Explicitly chosen secondary document, if any.
    pub fn secondary_override(&self) -> Option<&DocumentId> {
        self.secondary.as_ref()
    }

    /// Replaces the active document. Returns `true` when it changed.
    pub fn set_active(&mut self, id: DocumentId) -> bool {
        if self.active.as_ref() == Some(&id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Pins the secondary slot. Returns `true` when it changed.
    pub fn set_secondary(&mut self, id: DocumentId) -> bool {
        if self.secondary.as_ref() == Some(&id) {
            return false;
        }
        self.secondary = Some(id);
        true
    }

    /// Drops the secondary override so the slot falls back to its default.
    pub fn clear_secondary(&mut self) -> bool {
        self.secondary.take().is_some()
    }

    /// The document in the secondary slot.
    ///
    /// In split mode this is the explicit choice or, failing that, the first
    /// plugin-result document that is open. Outside split mode the secondary
    /// pane mirrors the active document.
    pub fn resolved_secondary<'a>(
        &'a self,
        documents: &'a OpenDocuments,
        is_split: bool,
    ) -> Option<&'a DocumentId> {
        if !is_split {
            return self.active.as_ref();
        }
        self.secondary
            .as_ref()
            .or_else(|| documents.first_of_kind(DocumentKind::PluginMarkdown))
    }

    /// Applies a tab click.
    ///
    /// In split mode a plugin-result tab only retargets the secondary slot;
    /// every other click retargets the active/primary document.
    pub fn click(&mut self, clicked: &DocumentDescriptor, is_split: bool) -> ActivatedSlot {
        if is_split && clicked.is_plugin_markdown() {
            self.set_secondary(clicked.id.clone());
            ActivatedSlot::Secondary
        } else {
            self.set_active(clicked.id.clone());
            ActivatedSlot::Active
        }
    }

    /// Reacts to `opened` having been appended to `documents`.
    ///
    /// Outside split mode the most recently opened document becomes active.
    /// Returns `true` when the active document changed.
    pub fn on_document_opened(
        &mut self,
        documents: &OpenDocuments,
        opened: &DocumentId,
        is_split: bool,
    ) -> bool {
        if is_split || documents.last() != Some(opened) {
            return false;
        }
        self.set_active(opened.clone())
    }

    /// What each pane should render.
    ///
    /// The split-mode left pane is anchored to the code tab (first open code
    /// document), not to the stored primary id.
    pub fn pane_targets(&self, documents: &OpenDocuments, is_split: bool) -> PaneTargets {
        if is_split {
            PaneTargets::Split {
                primary: code_tab_id(documents).cloned(),
                secondary: self.resolved_secondary(documents, true).cloned(),
            }
        } else {
            PaneTargets::Single {
                active: self.active.clone(),
            }
        }
    }
}

/// The split-mode left-pane anchor: the first code document by opening order.
pub fn code_tab_id(documents: &OpenDocuments) -> Option<&DocumentId> {
    documents.first_of_kind(DocumentKind::Code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(ids: &[DocumentId]) -> OpenDocuments {
        ids.iter().cloned().collect()
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = ActivationState::new();
        let documents = OpenDocuments::new();
        assert!(state.active().is_none());
        assert!(state.resolved_secondary(&documents, true).is_none());
        assert_eq!(
            state.pane_targets(&documents, false),
            PaneTargets::Single { active: None }
        );
    }

    #[test]
    fn test_secondary_defaults_to_first_plugin_document() {
        let lint = DocumentId::plugin_result("lint", "/p/a.rs");
        let review = DocumentId::plugin_result("review", "/p/a.rs");
        let documents = docs(&[DocumentId::new("/p/a.rs"), lint.clone(), review.clone()]);

        let mut state = ActivationState::new();
        assert_eq!(state.resolved_secondary(&documents, true), Some(&lint));

        state.set_secondary(review.clone());
        assert_eq!(state.resolved_secondary(&documents, true), Some(&review));

        assert!(state.clear_secondary());
        assert_eq!(state.resolved_secondary(&documents, true), Some(&lint));
    }

    #[test]
    fn test_split_click_on_plugin_tab_only_moves_secondary() {
        let file = DocumentId::new("/p/a.rs");
        let lint = DocumentId::plugin_result("lint", "/p/a.rs");
        let documents = docs(&[file.clone(), lint.clone()]);

        let mut state = ActivationState::new();
        state.set_active(file.clone());

        let slot = state.click(&DocumentDescriptor::resolve(&lint), true);
        assert_eq!(slot, ActivatedSlot::Secondary);
        assert_eq!(state.active(), Some(&file));
        assert_eq!(state.secondary_override(), Some(&lint));
        assert_eq!(code_tab_id(&documents), Some(&file));
    }

    #[test]
    fn test_single_click_on_plugin_tab_moves_active() {
        let lint = DocumentId::plugin_result("lint", "/p/a.rs");
        let mut state = ActivationState::new();
        state.set_active(DocumentId::new("/p/a.rs"));

        let slot = state.click(&DocumentDescriptor::resolve(&lint), false);
        assert_eq!(slot, ActivatedSlot::Active);
        assert_eq!(state.active(), Some(&lint));
        assert!(state.secondary_override().is_none());
    }

    #[test]
    fn test_last_opened_wins_outside_split() {
        let a = DocumentId::new("/p/a.rs");
        let b = DocumentId::new("/p/b.rs");
        let documents = docs(&[a.clone(), b.clone()]);

        let mut state = ActivationState::new();
        state.set_active(a.clone());

        assert!(!state.on_document_opened(&documents, &a, false));
        assert!(state.on_document_opened(&documents, &b, false));
        assert_eq!(state.active(), Some(&b));
    }

    #[test]
    fn test_opening_in_split_keeps_active() {
        let a = DocumentId::new("/p/a.rs");
        let lint = DocumentId::plugin_result("lint", "/p/a.rs");
        let documents = docs(&[a.clone(), lint.clone()]);

        let mut state = ActivationState::new();
        state.set_active(a.clone());
        assert!(!state.on_document_opened(&documents, &lint, true));
        assert_eq!(state.active(), Some(&a));
    }

    #[test]
    fn test_split_panes_anchor_to_code_tab() {
        let a = DocumentId::new("/p/a.rs");
        let b = DocumentId::new("/p/b.rs");
        let lint = DocumentId::plugin_result("lint", "/p/a.rs");
        let documents = docs(&[a.clone(), lint.clone(), b.clone()]);

        let mut state = ActivationState::new();
        state.set_active(b);

        assert_eq!(
            state.pane_targets(&documents, true),
            PaneTargets::Split {
                primary: Some(a),
                secondary: Some(lint),
            }
        );
    }

    #[test]
    fn test_dangling_active_is_tolerated() {
        let a = DocumentId::new("/p/a.rs");
        let mut documents = docs(&[a.clone()]);
        let mut state = ActivationState::new();
        state.set_active(a.clone());

        documents.remove(&a);
        assert_eq!(state.active(), Some(&a));
        assert_eq!(
            state.pane_targets(&documents, true),
            PaneTargets::Split {
                primary: None,
                secondary: None,
            }
        );
    }
}
