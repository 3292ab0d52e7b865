use codeview_core::document::{DocumentDescriptor, DocumentId, DocumentKind, FileStore, OpenDocuments};
use codeview_core::error::{CodeviewError, Result};
use codeview_core::path;
use codeview_core::plugin::{PluginExecutionRepository, PluginRegistry};
use codeview_core::{ActivatedSlot, ActivationState, PaneTargets, SplitLayout, Tab, project_tabs};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};

use crate::events::{EVENT_CHANNEL_CAPACITY, ViewEvent};

/// Whether opening a document may apply the last-opened-wins rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenPolicy {
    FollowLastOpened,
    Keep,
}

/// Mutable state of one viewer session. Lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub(crate) struct ViewSession {
    documents: OpenDocuments,
    activation: ActivationState,
    layout: SplitLayout,
    project_root: Option<String>,
}

/// Everything the layout renderer needs to paint the viewer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub tabs: Vec<Tab>,
    pub panes: PaneTargets,
    pub is_split: bool,
    pub split_sizes: [f32; 2],
    pub project_root: Option<String>,
}

/// Drives the tab strip and the split panes of the code viewer.
///
/// `CodeViewController` is responsible for:
/// - Keeping the ordered set of open documents
/// - Tracking which documents are active in single and split mode
/// - Attaching stored plugin results to a file when it is opened
///
/// Every mutating operation holds the session lock for its whole duration,
/// including the file store I/O it awaits. File-open requests therefore run
/// one after another in arrival order and never interleave.
pub struct CodeViewController {
    file_store: Arc<dyn FileStore>,
    plugin_registry: Arc<dyn PluginRegistry>,
    execution_repository: Arc<dyn PluginExecutionRepository>,
    session: Mutex<ViewSession>,
    events: broadcast::Sender<ViewEvent>,
}

impl CodeViewController {
    /// Creates a controller with an empty session in single-pane mode.
    pub fn new(
        file_store: Arc<dyn FileStore>,
        plugin_registry: Arc<dyn PluginRegistry>,
        execution_repository: Arc<dyn PluginExecutionRepository>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            file_store,
            plugin_registry,
            execution_repository,
            session: Mutex::new(ViewSession::default()),
            events,
        }
    }

    /// Starts the session with the given split layout.
    pub fn with_layout(self, layout: SplitLayout) -> Self {
        Self {
            session: Mutex::new(ViewSession {
                layout,
                ..ViewSession::default()
            }),
            ..self
        }
    }

    /// Subscribes to view events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    // ============================================================================
    // File open with plugin-result binding
    // ============================================================================

    /// Opens `file_path` as the only working file and attaches a stored plugin
    /// result for it.
    ///
    /// Every open document is closed first; only one file (plus at most one
    /// plugin result) is shown at a time. The first enabled plugin, in
    /// registry order, whose last execution holds a result for the file's
    /// project-relative path gets a plugin-result document. In split mode that
    /// document fills the secondary pane.
    ///
    /// # Returns
    ///
    /// The id of the attached plugin-result document, if any plugin matched.
    ///
    /// # Errors
    ///
    /// Returns the file store's error when the file cannot be opened.
    pub async fn open_file_with_plugin_match(&self, file_path: &str) -> Result<Option<DocumentId>> {
        let mut session = self.session.lock().await;

        self.close_all_locked(&mut session).await;
        if session.activation.clear_secondary() {
            self.emit(ViewEvent::SecondaryChanged { id: None });
        }

        let file_id = DocumentId::new(file_path);
        self.open_locked(&mut session, file_id.clone(), OpenPolicy::FollowLastOpened)
            .await?;
        if session.activation.set_active(file_id.clone()) {
            self.emit(ViewEvent::ActiveChanged { id: file_id });
        }

        let attached = self.attach_plugin_result(&mut session, file_path).await?;

        self.derive_project_root(&mut session).await;

        Ok(attached)
    }

    async fn attach_plugin_result(
        &self,
        session: &mut ViewSession,
        file_path: &str,
    ) -> Result<Option<DocumentId>> {
        let plugins = match self.plugin_registry.enabled_plugins().await {
            Ok(plugins) => plugins,
            Err(e) => {
                tracing::warn!(target: "plugin_match", "Failed to list plugins: {}", e);
                return Ok(None);
            }
        };

        let relative_path = path::relative(session.project_root.as_deref(), file_path);

        for plugin in plugins {
            let execution = match self.execution_repository.get_execution(&plugin.id).await {
                Ok(Some(execution)) => execution,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(
                        target: "plugin_match",
                        "Failed to load execution of plugin '{}': {}",
                        plugin.id,
                        e
                    );
                    continue;
                }
            };

            if execution.find_file(relative_path).is_none() {
                continue;
            }

            let result_id = DocumentId::plugin_result(&plugin.name, file_path);
            tracing::debug!(
                target: "plugin_match",
                "Plugin '{}' has a result for {}",
                plugin.name,
                relative_path
            );

            // The attached result never takes focus away from the file.
            self.open_locked(session, result_id.clone(), OpenPolicy::Keep)
                .await?;
            if session.layout.is_split && session.activation.set_secondary(result_id.clone()) {
                self.emit(ViewEvent::SecondaryChanged {
                    id: Some(result_id.clone()),
                });
            }
            return Ok(Some(result_id));
        }

        tracing::debug!(target: "plugin_match", "No plugin result for {}", relative_path);
        Ok(None)
    }

    // ============================================================================
    // Document set
    // ============================================================================

    /// Opens a document alongside the ones already open.
    ///
    /// Outside split mode the newly opened document becomes active. Opening a
    /// document that is already open changes nothing.
    pub async fn open_document(&self, id: DocumentId) -> Result<()> {
        let mut session = self.session.lock().await;
        self.open_locked(&mut session, id, OpenPolicy::FollowLastOpened)
            .await
    }

    /// Closes a document. Active slots pointing at it are left as they are.
    ///
    /// Returns `true` when the document was open.
    pub async fn close_document(&self, id: &DocumentId) -> bool {
        let mut session = self.session.lock().await;
        if !session.documents.remove(id) {
            return false;
        }
        self.file_store.close_document(id).await;
        self.emit(ViewEvent::DocumentClosed { id: id.clone() });
        true
    }

    /// Closes every open document.
    pub async fn close_all(&self) {
        let mut session = self.session.lock().await;
        self.close_all_locked(&mut session).await;
    }

    async fn open_locked(
        &self,
        session: &mut ViewSession,
        id: DocumentId,
        policy: OpenPolicy,
    ) -> Result<()> {
        if id.is_empty() || session.documents.contains(&id) {
            return Ok(());
        }

        self.file_store.open_document(&id).await?;
        session.documents.insert(id.clone());
        self.emit(ViewEvent::DocumentOpened { id: id.clone() });

        if policy == OpenPolicy::Keep {
            return Ok(());
        }
        let is_split = session.layout.is_split;
        if session
            .activation
            .on_document_opened(&session.documents, &id, is_split)
        {
            self.emit(ViewEvent::ActiveChanged { id });
        }
        Ok(())
    }

    async fn close_all_locked(&self, session: &mut ViewSession) {
        for id in session.documents.drain() {
            self.file_store.close_document(&id).await;
            self.emit(ViewEvent::DocumentClosed { id });
        }
    }

    // ============================================================================
    // Activation
    // ============================================================================

    /// Handles a click on the tab of `id`.
    ///
    /// In split mode a plugin-result tab only changes the secondary pane;
    /// any other click changes the active/primary document.
    pub async fn click_tab(&self, id: &DocumentId) -> ActivatedSlot {
        let mut session = self.session.lock().await;
        let is_split = session.layout.is_split;

        let before_active = session.activation.active().cloned();
        let before_secondary = session.activation.secondary_override().cloned();

        let slot = if session.documents.contains(id) {
            session
                .activation
                .click(&DocumentDescriptor::resolve(id), is_split)
        } else {
            // Unknown ids behave like code tabs.
            tracing::debug!(target: "activation", "Click on a tab that is not open: {}", id);
            session.activation.set_active(id.clone());
            ActivatedSlot::Active
        };

        match slot {
            ActivatedSlot::Active if before_active.as_ref() != Some(id) => {
                self.emit(ViewEvent::ActiveChanged { id: id.clone() });
            }
            ActivatedSlot::Secondary if before_secondary.as_ref() != Some(id) => {
                self.emit(ViewEvent::SecondaryChanged {
                    id: Some(id.clone()),
                });
            }
            _ => {}
        }
        slot
    }

    /// The active document (single mode) or primary slot (split mode).
    pub async fn active_document(&self) -> Option<DocumentId> {
        self.session.lock().await.activation.active().cloned()
    }

    /// The document filling the secondary slot.
    pub async fn secondary_document(&self) -> Option<DocumentId> {
        let session = self.session.lock().await;
        session
            .activation
            .resolved_secondary(&session.documents, session.layout.is_split)
            .cloned()
    }

    // ============================================================================
    // Split layout
    // ============================================================================

    /// Switches split mode on or off.
    pub async fn set_split(&self, is_split: bool) {
        let mut session = self.session.lock().await;
        if session.layout.is_split != is_split {
            session.layout.is_split = is_split;
            self.emit(ViewEvent::SplitChanged { is_split });
        }
    }

    /// Flips split mode and returns the new value.
    pub async fn toggle_split(&self) -> bool {
        let mut session = self.session.lock().await;
        let is_split = session.layout.toggle();
        self.emit(ViewEvent::SplitChanged { is_split });
        is_split
    }

    pub async fn is_split(&self) -> bool {
        self.session.lock().await.layout.is_split
    }

    /// Stores new pane widths (percent). Rejects sizes below the minimum.
    pub async fn set_split_sizes(&self, sizes: [f32; 2]) -> Result<()> {
        self.session.lock().await.layout.set_sizes(sizes)
    }

    // ============================================================================
    // Project root
    // ============================================================================

    /// Sets the project root used for plugin matching and loads its stored
    /// plugin executions.
    pub async fn set_project_root(&self, root: &str) -> Result<()> {
        let mut session = self.session.lock().await;
        self.set_project_root_locked(&mut session, root).await
    }

    pub async fn project_root(&self) -> Option<String> {
        self.session.lock().await.project_root.clone()
    }

    async fn set_project_root_locked(&self, session: &mut ViewSession, root: &str) -> Result<()> {
        self.execution_repository.initialize(root).await?;
        session.project_root = Some(root.to_string());
        tracing::info!(target: "project", "Project root set to {}", root);
        self.emit(ViewEvent::ProjectRootChanged {
            root: root.to_string(),
        });
        Ok(())
    }

    /// Without a project root, adopt the directory of the active file.
    async fn derive_project_root(&self, session: &mut ViewSession) {
        if session.project_root.is_some() {
            return;
        }
        let Some(active) = session.activation.active() else {
            return;
        };

        let root = path::dirname(active.source_path()).to_string();
        if let Err(e) = self.set_project_root_locked(session, &root).await {
            tracing::warn!(
                target: "project",
                "Failed to load plugin executions for {}: {}",
                root,
                e
            );
        }
    }

    // ============================================================================
    // Projections
    // ============================================================================

    /// Open document ids in opening order.
    pub async fn open_documents(&self) -> Vec<DocumentId> {
        self.session.lock().await.documents.iter().cloned().collect()
    }

    /// The tab strip.
    pub async fn tabs(&self) -> Vec<Tab> {
        let session = self.session.lock().await;
        project_tabs(&session.documents, &session.activation, session.layout.is_split)
    }

    /// What each pane should render.
    pub async fn pane_targets(&self) -> PaneTargets {
        let session = self.session.lock().await;
        session
            .activation
            .pane_targets(&session.documents, session.layout.is_split)
    }

    /// Full state for the layout renderer.
    pub async fn snapshot(&self) -> ViewSnapshot {
        let session = self.session.lock().await;
        let is_split = session.layout.is_split;
        ViewSnapshot {
            tabs: project_tabs(&session.documents, &session.activation, is_split),
            panes: session.activation.pane_targets(&session.documents, is_split),
            is_split,
            split_sizes: session.layout.sizes,
            project_root: session.project_root.clone(),
        }
    }

    /// Content to render for a document.
    ///
    /// Code documents are read through the file store. Plugin-result
    /// documents resolve to the stored markdown of the named plugin for the
    /// original file.
    pub async fn document_content(&self, id: &DocumentId) -> Result<String> {
        let project_root = self.session.lock().await.project_root.clone();
        let descriptor = DocumentDescriptor::resolve(id);

        match descriptor.kind {
            DocumentKind::Code => self.file_store.read_file(id.as_str()).await,
            DocumentKind::PluginMarkdown => {
                let plugin_name = descriptor.plugin_name.unwrap_or_default();
                let original_path = descriptor.original_path.unwrap_or_default();

                let plugin = self
                    .plugin_registry
                    .list_plugins()
                    .await?
                    .into_iter()
                    .find(|p| p.name == plugin_name)
                    .ok_or_else(|| CodeviewError::not_found("Plugin", plugin_name.clone()))?;

                let relative_path = path::relative(project_root.as_deref(), &original_path);
                self.execution_repository
                    .get_execution(&plugin.id)
                    .await?
                    .and_then(|execution| {
                        execution
                            .find_file(relative_path)
                            .map(|file| file.content.clone())
                    })
                    .ok_or_else(|| CodeviewError::not_found("PluginResult", id.to_string()))
            }
        }
    }

    fn emit(&self, event: ViewEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
