//! Application layer for the code viewer.
//!
//! This crate provides the use cases that coordinate the domain model with
//! the file, plugin and model-configuration stores: the tab and split-view
//! controller, its event stream, and the model configuration service.

pub mod controller;
pub mod events;
pub mod model_config_service;

pub use controller::{CodeViewController, ViewSnapshot};
pub use events::ViewEvent;
pub use model_config_service::ModelConfigService;
