//! Model Config Service
//!
//! Backs the add-model dialog: validates the submitted form, assigns an id
//! and hands the record to the repository.

use codeview_core::error::Result;
use codeview_core::model_config::{ModelConfig, ModelRepository, NewModelConfig};
use std::sync::Arc;

/// Service for adding and listing model configurations
pub struct ModelConfigService {
    repository: Arc<dyn ModelRepository>,
}

impl ModelConfigService {
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    /// Validates `form` and stores it as a new, enabled model.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete or out-of-range form,
    /// or the repository's error when the record cannot be stored.
    pub async fn add_model(&self, form: NewModelConfig) -> Result<ModelConfig> {
        let config = form.into_config()?;
        self.repository.add(config.clone()).await?;
        tracing::info!(target: "model_config", "Model '{}' added ({})", config.name, config.id);
        Ok(config)
    }

    pub async fn list_models(&self) -> Result<Vec<ModelConfig>> {
        self.repository.list_all().await
    }

    pub async fn list_enabled_models(&self) -> Result<Vec<ModelConfig>> {
        Ok(self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|m| m.enabled)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // Mock ModelRepository for testing
    #[derive(Default)]
    struct MockModelRepository {
        models: Mutex<Vec<ModelConfig>>,
    }

    #[async_trait]
    impl ModelRepository for MockModelRepository {
        async fn add(&self, config: ModelConfig) -> Result<()> {
            self.models.lock().unwrap().push(config);
            Ok(())
        }

        async fn list_all(&self) -> Result<Vec<ModelConfig>> {
            Ok(self.models.lock().unwrap().clone())
        }
    }

    #[tokio::test]
    async fn test_add_model_applies_defaults() {
        let repository = Arc::new(MockModelRepository::default());
        let service = ModelConfigService::new(repository.clone());

        let model = service
            .add_model(NewModelConfig::new("local", "sk-test"))
            .await
            .unwrap();

        assert!(model.enabled);
        assert!(!model.id.is_empty());
        assert_eq!(model.base_url, "http://localhost:11434/v1");
        assert_eq!(model.temperature, 0.6);
        assert_eq!(model.max_context_tokens, 60_000);
        assert_eq!(model.max_output_tokens, 8_000);
        assert_eq!(model.concurrency, 1);
        assert_eq!(service.list_models().await.unwrap(), vec![model]);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_stored() {
        let repository = Arc::new(MockModelRepository::default());
        let service = ModelConfigService::new(repository.clone());

        let form = NewModelConfig {
            temperature: 2.5,
            ..NewModelConfig::new("hot", "sk-test")
        };
        assert!(service.add_model(form).await.unwrap_err().is_validation());

        let form = NewModelConfig {
            concurrency: 0,
            ..NewModelConfig::new("idle", "sk-test")
        };
        assert!(service.add_model(form).await.unwrap_err().is_validation());

        assert!(repository.models.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_enabled_models() {
        let repository = Arc::new(MockModelRepository::default());
        let service = ModelConfigService::new(repository.clone());

        let kept = service
            .add_model(NewModelConfig::new("kept", "sk-1"))
            .await
            .unwrap();
        let mut disabled = NewModelConfig::new("off", "sk-2").into_config().unwrap();
        disabled.enabled = false;
        repository.add(disabled).await.unwrap();

        assert_eq!(service.list_models().await.unwrap().len(), 2);
        assert_eq!(service.list_enabled_models().await.unwrap(), vec![kept]);
    }
}
