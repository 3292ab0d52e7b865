//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the root configuration
//! from the configuration file (~/.config/codeview/config.toml).

use crate::paths::CodeviewPaths;
use codeview_core::config::CodeviewConfig;
use codeview_core::error::{CodeviewError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
///
/// The file is read lazily on first access. A missing file yields the
/// default configuration; a malformed one is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<CodeviewConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config path.
    pub fn new() -> Result<Self> {
        let path = CodeviewPaths::config_file().map_err(|e| CodeviewError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading a custom path (for testing and `--config`).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<CodeviewConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| CodeviewError::internal(format!("Config lock poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_config(&self.path)?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| CodeviewError::internal(format!("Config lock poisoned: {}", e)))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(path: &Path) -> Result<CodeviewConfig> {
        if !path.exists() {
            tracing::debug!(target: "config", "No config file at {:?}, using defaults", path);
            return Ok(CodeviewConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CodeviewError::io(format!("Failed to read config file at {:?}: {}", path, e))
        })?;

        let config: CodeviewConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::info!(
            target: "config",
            "Loaded config from {:?} ({} plugins)",
            path,
            config.plugins.len()
        );
        Ok(config)
    }
}
