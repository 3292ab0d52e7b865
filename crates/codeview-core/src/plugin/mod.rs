//! Plugin domain models and repository traits.
//!
//! Plugins analyze project files ahead of time; their per-file markdown
//! output is attached to a file when the viewer opens it.

mod model;
mod repository;

pub use model::{ExecutedFile, Plugin, PluginExecution};
pub use repository::{PluginExecutionRepository, PluginRegistry};
