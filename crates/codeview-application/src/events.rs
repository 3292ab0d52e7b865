//! View events published by the controller.
//!
//! The layout renderer subscribes to these instead of diffing state. Every
//! event is emitted after the state change it describes has been applied.

use serde::Serialize;

use codeview_core::DocumentId;

/// Capacity of the broadcast channel. Slow subscribers lag rather than block
/// the controller.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ViewEvent {
    /// A document was appended to the open set.
    DocumentOpened { id: DocumentId },
    /// A document was removed from the open set.
    DocumentClosed { id: DocumentId },
    /// The single-pane active / split-mode primary document changed.
    ActiveChanged { id: DocumentId },
    /// The explicit secondary document changed (`None` when cleared).
    SecondaryChanged { id: Option<DocumentId> },
    /// Split mode was switched on or off.
    SplitChanged { is_split: bool },
    /// The project root used for plugin matching changed.
    ProjectRootChanged { root: String },
}
