pub mod config_plugin_registry;
pub mod config_service;
pub mod fs_file_store;
pub mod json_plugin_execution_repository;
pub mod paths;
pub mod toml_model_repository;

pub use crate::config_plugin_registry::ConfigPluginRegistry;
pub use crate::config_service::ConfigService;
pub use crate::fs_file_store::FsFileStore;
pub use crate::json_plugin_execution_repository::JsonPluginExecutionRepository;
pub use crate::paths::CodeviewPaths;
pub use crate::toml_model_repository::TomlModelRepository;
