//! Model configuration repository trait.

use async_trait::async_trait;

use super::model::ModelConfig;
use crate::error::Result;

/// Repository for model configuration persistence.
#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// Appends a configuration. Fails if a model with the same id exists.
    async fn add(&self, config: ModelConfig) -> Result<()>;

    /// Lists all configurations in the order they were added.
    async fn list_all(&self) -> Result<Vec<ModelConfig>>;
}
