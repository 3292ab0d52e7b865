//! Document domain module.
//!
//! A document is anything occupying a tab: a real file, or a synthetic
//! plugin-result document that renders a plugin's markdown output for a file.
//!
//! # Module Structure
//!
//! - `identifier`: `DocumentId` and the plugin-result key encoding
//! - `descriptor`: `DocumentDescriptor` / `DocumentKind` derived from an id
//! - `set`: `OpenDocuments`, the ordered set of open ids
//! - `store`: `FileStore` trait for the filesystem collaborator

mod descriptor;
mod identifier;
mod set;
mod store;

pub use descriptor::{DocumentDescriptor, DocumentKind, UNKNOWN_FILE_TITLE};
pub use identifier::{DocumentId, PLUGIN_RESULT_DELIMITER, PLUGIN_RESULT_PREFIX, PluginResultKey};
pub use set::OpenDocuments;
pub use store::FileStore;
