use codeview_application::{CodeViewController, ViewEvent};
use codeview_core::DocumentId;
use codeview_core::activation::PaneTargets;
use codeview_core::plugin::{ExecutedFile, Plugin, PluginExecution};
use codeview_infrastructure::{
    ConfigPluginRegistry, ConfigService, FsFileStore, JsonPluginExecutionRepository,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Lays out a small project with one source file and stored lint output for it.
async fn create_project(root: &Path) -> JsonPluginExecutionRepository {
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::write(root.join("src/x.ts"), "export const x = 1;\n").unwrap();
    std::fs::write(root.join("src/y.ts"), "export const y = 2;\n").unwrap();

    let repository = JsonPluginExecutionRepository::new();
    let mut executions = HashMap::new();
    executions.insert(
        "p-lint".to_string(),
        PluginExecution::new(vec![ExecutedFile {
            filename: "src/x.ts".to_string(),
            content: "## lint\n\nNo issues.".to_string(),
        }]),
    );
    repository
        .save(root.to_str().unwrap(), &executions)
        .await
        .unwrap();
    repository
}

fn registry() -> ConfigPluginRegistry {
    ConfigPluginRegistry::new(vec![Plugin::new("p-lint", "lint").unwrap()]).unwrap()
}

#[tokio::test]
async fn test_open_file_attaches_stored_plugin_result() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();
    let repository = create_project(temp_dir.path()).await;

    let controller = CodeViewController::new(
        Arc::new(FsFileStore::new()),
        Arc::new(registry()),
        Arc::new(repository),
    );
    controller.set_project_root(&root).await.unwrap();

    let file = format!("{}/src/x.ts", root);
    let attached = controller
        .open_file_with_plugin_match(&file)
        .await
        .unwrap()
        .expect("lint result should be attached");

    assert_eq!(attached, DocumentId::plugin_result("lint", &file));
    assert_eq!(
        controller.open_documents().await,
        vec![DocumentId::new(file.clone()), attached.clone()]
    );
    assert_eq!(
        controller.document_content(&attached).await.unwrap(),
        "## lint\n\nNo issues."
    );
    assert_eq!(
        controller
            .document_content(&DocumentId::new(file.clone()))
            .await
            .unwrap(),
        "export const x = 1;\n"
    );

    // A file without stored results opens alone.
    let other = format!("{}/src/y.ts", root);
    assert!(
        controller
            .open_file_with_plugin_match(&other)
            .await
            .unwrap()
            .is_none()
    );
    assert_eq!(controller.open_documents().await, vec![DocumentId::new(other)]);
}

#[tokio::test]
async fn test_split_view_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    let repository = create_project(&root).await;

    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[view]
split = true
split_sizes = [60.0, 40.0]

[[plugins]]
id = "p-lint"
name = "lint"
"#,
    )
    .unwrap();
    let config = ConfigService::with_path(&config_path).get_config().unwrap();

    let controller = CodeViewController::new(
        Arc::new(FsFileStore::new()),
        Arc::new(ConfigPluginRegistry::new(config.plugins.clone()).unwrap()),
        Arc::new(repository),
    )
    .with_layout(config.view.layout().unwrap());

    let mut events = controller.subscribe();
    let root = root.to_str().unwrap().to_string();
    controller.set_project_root(&root).await.unwrap();

    let file = format!("{}/src/x.ts", root);
    controller.open_file_with_plugin_match(&file).await.unwrap();

    let snapshot = controller.snapshot().await;
    assert!(snapshot.is_split);
    assert_eq!(snapshot.split_sizes, [60.0, 40.0]);
    assert_eq!(
        snapshot.panes,
        PaneTargets::Split {
            primary: Some(DocumentId::new(file.clone())),
            secondary: Some(DocumentId::plugin_result("lint", &file)),
        }
    );
    assert!(snapshot.tabs.iter().all(|t| t.is_active));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["panes"]["mode"], "split");
    assert_eq!(json["tabs"][1]["kind"], "plugin_markdown");
    assert_eq!(json["tabs"][1]["title"], "x.ts");
    assert_eq!(json["tabs"][1]["pluginName"], "lint");

    assert_eq!(
        events.recv().await.unwrap(),
        ViewEvent::ProjectRootChanged { root: root.clone() }
    );
}

#[tokio::test]
async fn test_missing_file_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap().to_string();
    let repository = create_project(temp_dir.path()).await;

    let controller = CodeViewController::new(
        Arc::new(FsFileStore::new()),
        Arc::new(registry()),
        Arc::new(repository),
    );
    controller.set_project_root(&root).await.unwrap();

    let err = controller
        .open_file_with_plugin_match(&format!("{}/src/missing.ts", root))
        .await
        .unwrap_err();
    assert!(err.is_io());
    assert!(controller.tabs().await.is_empty());
}
