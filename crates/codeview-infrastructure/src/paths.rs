//! Unified path management for codeview configuration files.
//!
//! All per-user files live under the platform config directory resolved by
//! the `dirs` crate, so Linux, macOS and Windows share one layout.

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for codeview.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/codeview/          # Config directory
/// ├── config.toml              # Application configuration
/// └── models.toml              # Model configurations (name configurable)
///
/// {project_root}/
/// └── .codeview/
///     └── plugin_executions.json   # Stored plugin results (name configurable)
/// ```
pub struct CodeviewPaths;

impl CodeviewPaths {
    const APP_DIR: &'static str = "codeview";

    /// Returns the codeview configuration directory (e.g. `~/.config/codeview/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path of a file stored next to `config.toml`.
    pub fn config_relative(name: &str) -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(name))
    }

    /// Returns the execution data file of a project.
    pub fn execution_data_file(project_root: &Path, relative: &str) -> PathBuf {
        project_root.join(relative)
    }
}
