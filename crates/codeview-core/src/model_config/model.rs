//! Model configuration domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CodeviewError, Result};

/// Default endpoint offered for new model configurations (local Ollama).
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_TEMPERATURE: f64 = 0.6;
pub const DEFAULT_MAX_CONTEXT_TOKENS: u32 = 60_000;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8_000;
pub const DEFAULT_CONCURRENCY: u32 = 1;

/// Upper bound accepted for sampling temperature.
pub const MAX_TEMPERATURE: f64 = 2.0;

/// A named model endpoint that plugins can run against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    /// Unique identifier (UUID format)
    pub id: String,
    pub name: String,
    pub api_key: String,
    pub base_url: String,
    pub temperature: f64,
    pub max_context_tokens: u32,
    pub max_output_tokens: u32,
    /// Number of requests a plugin may keep in flight against this model.
    pub concurrency: u32,
    pub enabled: bool,
}

/// Fields a user fills in when adding a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModelConfig {
    pub name: String,
    pub api_key: String,
    pub base_url: String,
    pub temperature: f64,
    pub max_context_tokens: u32,
    pub max_output_tokens: u32,
    pub concurrency: u32,
}

impl Default for NewModelConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_context_tokens: DEFAULT_MAX_CONTEXT_TOKENS,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl NewModelConfig {
    /// Starts a form with the default endpoint and limits.
    pub fn new(name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Checks the form the way the add-model dialog does.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CodeviewError::validation("Model name is required"));
        }
        if self.api_key.trim().is_empty() {
            return Err(CodeviewError::validation("API key is required"));
        }
        if self.base_url.trim().is_empty() {
            return Err(CodeviewError::validation("Base URL is required"));
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(CodeviewError::validation(format!(
                "Temperature must be between 0 and {}, got {}",
                MAX_TEMPERATURE, self.temperature
            )));
        }
        if self.max_context_tokens == 0 || self.max_output_tokens == 0 {
            return Err(CodeviewError::validation("Token limits must be positive"));
        }
        if self.concurrency < 1 {
            return Err(CodeviewError::validation("Concurrency must be at least 1"));
        }
        Ok(())
    }

    /// Turns a validated form into an enabled configuration with a fresh id.
    pub fn into_config(self) -> Result<ModelConfig> {
        self.validate()?;
        Ok(ModelConfig {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            api_key: self.api_key,
            base_url: self.base_url,
            temperature: self.temperature,
            max_context_tokens: self.max_context_tokens,
            max_output_tokens: self.max_output_tokens,
            concurrency: self.concurrency,
            enabled: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = NewModelConfig::new("local", "sk-test");
        assert_eq!(form.base_url, "http://localhost:11434/v1");
        assert_eq!(form.temperature, 0.6);
        assert_eq!(form.max_context_tokens, 60_000);
        assert_eq!(form.max_output_tokens, 8_000);
        assert_eq!(form.concurrency, 1);
    }

    #[test]
    fn test_into_config_assigns_id_and_enables() {
        let config = NewModelConfig::new("local", "sk-test").into_config().unwrap();
        assert!(config.enabled);
        assert!(Uuid::parse_str(&config.id).is_ok());
    }

    #[test]
    fn test_validation_errors() {
        assert!(NewModelConfig::new("", "sk").validate().is_err());
        assert!(NewModelConfig::new("m", "  ").validate().is_err());

        let mut form = NewModelConfig::new("m", "sk");
        form.temperature = 2.5;
        assert!(form.validate().unwrap_err().is_validation());

        let mut form = NewModelConfig::new("m", "sk");
        form.concurrency = 0;
        assert!(form.validate().is_err());

        let mut form = NewModelConfig::new("m", "sk");
        form.max_output_tokens = 0;
        assert!(form.validate().is_err());
    }
}
