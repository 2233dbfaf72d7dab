//! Configuration for the analysis pipeline
//!
//! All ambient state lives here: API keys and model settings are read from
//! the environment exactly once at startup and passed by reference into the
//! components. Business logic never touches the environment itself.

use crate::error::{AnalystError, Result};
use saham_prompt::Language;
use std::time::Duration;

/// Default chat model used for analysis
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DEFAULT_MAX_TOKENS: usize = 2048;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for the analysis pipeline
#[derive(Debug, Clone)]
pub struct AnalystConfig {
    /// OpenAI API key (required)
    pub openai_api_key: String,

    /// LangSmith observability API key (required)
    pub langsmith_api_key: String,

    /// Model identifier sent to the provider
    pub model: String,

    /// Optional custom API base for OpenAI-compatible endpoints
    pub api_base: Option<String>,

    /// Language the analysis prompt is rendered in
    pub language: Language,

    /// Maximum tokens the model may generate
    pub max_tokens: usize,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout for the model call
    pub request_timeout: Duration,
}

impl AnalystConfig {
    /// Create a new configuration builder
    pub fn builder() -> AnalystConfigBuilder {
        AnalystConfigBuilder::default()
    }

    /// Load configuration from the environment
    ///
    /// `OPENAI_API_KEY` and `LANGCHAIN_API_KEY` are required; a missing key
    /// is a startup failure, not a recoverable runtime error. `OPENAI_MODEL`
    /// and `OPENAI_API_BASE` are optional overrides.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = require_env("OPENAI_API_KEY")?;
        let langsmith_api_key = require_env("LANGCHAIN_API_KEY")?;

        let mut builder = Self::builder()
            .openai_api_key(openai_api_key)
            .langsmith_api_key(langsmith_api_key);

        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            builder = builder.model(model);
        }
        if let Ok(api_base) = std::env::var("OPENAI_API_BASE") {
            builder = builder.api_base(api_base);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.openai_api_key.is_empty() {
            return Err(AnalystError::Config(
                "OpenAI API key must not be empty".to_string(),
            ));
        }
        if self.langsmith_api_key.is_empty() {
            return Err(AnalystError::Config(
                "LangSmith API key must not be empty".to_string(),
            ));
        }
        if self.max_tokens == 0 {
            return Err(AnalystError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AnalystError::Config(format!("{name} environment variable not set")))
}

/// Builder for AnalystConfig
#[derive(Debug, Default)]
pub struct AnalystConfigBuilder {
    openai_api_key: Option<String>,
    langsmith_api_key: Option<String>,
    model: Option<String>,
    api_base: Option<String>,
    language: Option<Language>,
    max_tokens: Option<usize>,
    temperature: Option<f32>,
    request_timeout: Option<Duration>,
}

impl AnalystConfigBuilder {
    /// Set the OpenAI API key
    pub fn openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    /// Set the LangSmith API key
    pub fn langsmith_api_key(mut self, key: impl Into<String>) -> Self {
        self.langsmith_api_key = Some(key.into());
        self
    }

    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set a custom API base URL
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the prompt language
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the maximum tokens to generate
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when a required key is missing or a value
    /// fails validation.
    pub fn build(self) -> Result<AnalystConfig> {
        let openai_api_key = self
            .openai_api_key
            .ok_or_else(|| AnalystError::Config("OpenAI API key is required".to_string()))?;
        let langsmith_api_key = self
            .langsmith_api_key
            .ok_or_else(|| AnalystError::Config("LangSmith API key is required".to_string()))?;

        let config = AnalystConfig {
            openai_api_key,
            langsmith_api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: self.api_base,
            language: self.language.unwrap_or_default(),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        };

        config.validate()?;
        Ok(config)
    }
}
