//! Domain layer for CodeView.
//!
//! Holds the document model, the tab and split-view state machine and the
//! collaborator traits (file store, plugin registry, execution and model
//! repositories) that the application layer wires together.

pub mod activation;
pub mod config;
pub mod document;
pub mod error;
pub mod model_config;
pub mod path;
pub mod plugin;
pub mod split;
pub mod tab;

// Re-export common error type
pub use error::CodeviewError;

pub use activation::{ActivatedSlot, ActivationState, PaneTargets, code_tab_id};
pub use document::{DocumentDescriptor, DocumentId, DocumentKind, OpenDocuments};
pub use split::SplitLayout;
pub use tab::{Tab, project_tabs};
