//! Prompt rendering and model invocation

use crate::config::AnalystConfig;
use crate::error::Result;
use saham_llm::{CompletionRequest, LLMProvider, Message};
use saham_prompt::PromptTemplate;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Renders the analysis prompt and asks the model for a summary
pub struct Summarizer {
    provider: Arc<dyn LLMProvider>,
    config: Arc<AnalystConfig>,
}

impl Summarizer {
    /// Create a new summarizer
    pub fn new(provider: Arc<dyn LLMProvider>, config: Arc<AnalystConfig>) -> Self {
        Self { provider, config }
    }

    /// Generate an analysis from the prompt variables
    ///
    /// The model's reply is returned verbatim, without post-processing.
    #[instrument(skip(self, vars))]
    pub async fn summarize(&self, vars: &Value) -> Result<String> {
        let template = crate::prompts::stock_analysis_prompt()?;
        let prompt = template.render_with_fallback(&self.config.language, vars)?;

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending analysis prompt"
        );

        let request = CompletionRequest::builder(self.config.model.as_str())
            .add_message(Message::user(prompt))
            .max_tokens(self.config.max_tokens)
            .temperature(self.config.temperature)
            .build();

        let response = self.provider.complete(request).await?;
        Ok(response.message.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use saham_llm::{
        CompletionResponse, LLMError, Message, StopReason, TokenUsage,
    };
    use serde_json::json;

    struct CannedProvider {
        reply: String,
    }

    #[async_trait]
    impl LLMProvider for CannedProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> std::result::Result<CompletionResponse, LLMError> {
            Ok(CompletionResponse {
                message: Message::assistant(self.reply.clone()),
                stop_reason: StopReason::EndTurn,
                usage: TokenUsage {
                    input_tokens: 10,
                    output_tokens: 5,
                },
            })
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl LLMProvider for FailingProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> std::result::Result<CompletionResponse, LLMError> {
            Err(LLMError::RequestFailed("HTTP 500".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn config() -> Arc<AnalystConfig> {
        Arc::new(
            AnalystConfig::builder()
                .openai_api_key("sk-test")
                .langsmith_api_key("ls-test")
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_summarize_returns_reply_verbatim() {
        let summarizer = Summarizer::new(
            Arc::new(CannedProvider {
                reply: "BBCA adalah bank terbesar di Indonesia.".to_string(),
            }),
            config(),
        );

        let analysis = summarizer
            .summarize(&json!({"name": "Bank Central Asia"}))
            .await
            .unwrap();
        assert_eq!(analysis, "BBCA adalah bank terbesar di Indonesia.");
    }

    #[tokio::test]
    async fn test_summarize_maps_provider_failure() {
        let summarizer = Summarizer::new(Arc::new(FailingProvider), config());

        let err = summarizer.summarize(&json!({})).await.unwrap_err();
        assert!(err.to_string().starts_with("Error analyzing stock: "));
        assert!(err.to_string().contains("HTTP 500"));
    }
}
