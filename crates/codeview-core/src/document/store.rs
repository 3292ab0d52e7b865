//! File store trait.

use async_trait::async_trait;

use super::identifier::DocumentId;
use crate::error::Result;

/// Filesystem collaborator behind the viewer.
///
/// The controller owns the open-document set; the store only performs the
/// I/O side of opening and closing documents and serves file content.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Prepares a document for display.
    ///
    /// For a plain file this must fail when the file cannot be read. Plugin
    /// result identifiers carry no file of their own and should be accepted.
    async fn open_document(&self, id: &DocumentId) -> Result<()>;

    /// Releases whatever `open_document` acquired. Closing a document that is
    /// not open is a no-op.
    async fn close_document(&self, id: &DocumentId);

    /// Reads the UTF-8 content of the file at `path`.
    async fn read_file(&self, path: &str) -> Result<String>;
}
