//! Ordered set of open documents.

use serde::{Deserialize, Serialize};

use super::descriptor::DocumentKind;
use super::identifier::DocumentId;

/// Documents currently occupying tabs, in the order they were opened.
///
/// Insertion order drives both tab order and the "most recently opened is
/// active" rule. Identifiers are unique and never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenDocuments {
    ids: Vec<DocumentId>,
}

impl OpenDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless it is empty or already open.
    ///
    /// Returns `true` when the set changed.
    pub fn insert(&mut self, id: DocumentId) -> bool {
        if id.is_empty() || self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id`, keeping the order of the remaining documents.
    ///
    /// Returns `true` when the document was open.
    pub fn remove(&mut self, id: &DocumentId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|open| open != id);
        self.ids.len() != before
    }

    /// Removes every document and hands them back in opening order.
    pub fn drain(&mut self) -> Vec<DocumentId> {
        std::mem::take(&mut self.ids)
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.ids.iter().any(|open| open == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentId> {
        self.ids.iter()
    }

    /// The most recently opened document.
    pub fn last(&self) -> Option<&DocumentId> {
        self.ids.last()
    }

    /// The first document of `kind`, by opening order.
    pub fn first_of_kind(&self, kind: DocumentKind) -> Option<&DocumentId> {
        self.ids.iter().find(|id| DocumentKind::of(id) == kind)
    }
}

impl<'a> IntoIterator for &'a OpenDocuments {
    type Item = &'a DocumentId;
    type IntoIter = std::slice::Iter<'a, DocumentId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

impl FromIterator<DocumentId> for OpenDocuments {
    fn from_iter<I: IntoIterator<Item = DocumentId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
