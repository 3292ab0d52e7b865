//! Model configuration domain models and repository trait.
//!
//! Model configurations are consumed as a plain record store: the viewer only
//! adds and lists them.

mod model;
mod repository;

pub use model::{
    DEFAULT_BASE_URL, DEFAULT_CONCURRENCY, DEFAULT_MAX_CONTEXT_TOKENS, DEFAULT_MAX_OUTPUT_TOKENS,
    DEFAULT_TEMPERATURE, MAX_TEMPERATURE, ModelConfig, NewModelConfig,
};
pub use repository::ModelRepository;
