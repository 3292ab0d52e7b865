use anyhow::{Context, Result};
use codeview_application::{CodeViewController, ViewSnapshot};
use codeview_core::{DocumentId, path};
use codeview_infrastructure::{
    ConfigPluginRegistry, ConfigService, FsFileStore, JsonPluginExecutionRepository,
};
use std::sync::Arc;

async fn build_controller(
    config: &ConfigService,
    root: Option<&str>,
    split: bool,
) -> Result<CodeViewController> {
    let config = config
        .get_config()
        .with_context(|| format!("Failed to load {}", config.path().display()))?;

    let mut layout = config.view.layout()?;
    layout.is_split |= split;

    let controller = CodeViewController::new(
        Arc::new(FsFileStore::new()),
        Arc::new(ConfigPluginRegistry::new(config.plugins)?),
        Arc::new(JsonPluginExecutionRepository::with_data_file(
            config.storage.execution_data_file,
        )),
    )
    .with_layout(layout);

    if let Some(root) = root {
        controller
            .set_project_root(root)
            .await
            .with_context(|| format!("Failed to load plugin results under {}", root))?;
    }
    Ok(controller)
}

/// Opens `file` in a fresh controller and returns the resulting view.
///
/// A run opens exactly one file, so without `--root` the file's directory is
/// loaded as project root before matching rather than after.
async fn open_snapshot(
    config: &ConfigService,
    file: &str,
    root: Option<&str>,
    split: bool,
) -> Result<ViewSnapshot> {
    let root = root
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| path::dirname(file));
    let controller = build_controller(config, Some(root), split).await?;

    let attached = controller
        .open_file_with_plugin_match(file)
        .await
        .with_context(|| format!("Failed to open {}", file))?;
    match &attached {
        Some(id) => tracing::info!("Attached {}", id),
        None => tracing::info!("No plugin result for {}", file),
    }

    Ok(controller.snapshot().await)
}

pub async fn open(config: &ConfigService, file: &str, root: Option<&str>, split: bool) -> Result<()> {
    let snapshot = open_snapshot(config, file, root, split).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

pub async fn content(config: &ConfigService, id: &str, root: Option<&str>) -> Result<()> {
    let controller = build_controller(config, root, false).await?;
    let id = DocumentId::new(id);

    let content = controller
        .document_content(&id)
        .await
        .with_context(|| format!("Failed to load content of {}", id))?;
    print!("{}", content);
    Ok(())
}
