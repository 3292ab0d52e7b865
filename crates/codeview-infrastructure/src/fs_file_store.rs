//! Filesystem-backed `FileStore`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tokio::sync::RwLock;

use codeview_core::document::{DocumentId, FileStore};
use codeview_core::error::{CodeviewError, Result};

/// File store reading from the local filesystem.
///
/// Opening a code document reads the file once and keeps the content until
/// the document is closed; `read_file` answers from that cache when it can.
/// Plugin-result documents have no file behind them and open without I/O.
#[derive(Default)]
pub struct FsFileStore {
    cache: RwLock<HashMap<String, String>>,
}

impl FsFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of file contents currently held.
    pub async fn cached_len(&self) -> usize {
        self.cache.read().await.len()
    }

    async fn load(path: &str) -> Result<String> {
        let metadata = fs::metadata(Path::new(path))
            .await
            .map_err(|e| CodeviewError::io(format!("Failed to open {}: {}", path, e)))?;
        if !metadata.is_file() {
            return Err(CodeviewError::io(format!("Not a regular file: {}", path)));
        }

        fs::read_to_string(path)
            .await
            .map_err(|e| CodeviewError::io(format!("Failed to read {}: {}", path, e)))
    }
}

#[async_trait]
impl FileStore for FsFileStore {
    async fn open_document(&self, id: &DocumentId) -> Result<()> {
        if id.is_plugin_result() {
            return Ok(());
        }

        let path = id.as_str();
        let content = Self::load(path).await?;
        tracing::debug!(target: "file_store", "Opened {} ({} bytes)", path, content.len());

        self.cache.write().await.insert(path.to_string(), content);
        Ok(())
    }

    async fn close_document(&self, id: &DocumentId) {
        if self.cache.write().await.remove(id.as_str()).is_some() {
            tracing::debug!(target: "file_store", "Closed {}", id);
        }
    }

    async fn read_file(&self, path: &str) -> Result<String> {
        if let Some(content) = self.cache.read().await.get(path) {
            return Ok(content.clone());
        }
        Self::load(path).await
    }
}
