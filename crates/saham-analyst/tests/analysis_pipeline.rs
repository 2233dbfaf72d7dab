//! End-to-end pipeline tests with a mocked LLM provider
//!
//! The fetch stage is exercised through its pure pieces (snapshot building
//! and default-filling); the network-facing clients have their own ignored
//! live tests.

use async_trait::async_trait;
use mockall::mock;
use saham_analyst::{AnalystConfig, Summarizer, with_defaults};
use saham_llm::{
    CompletionRequest, CompletionResponse, LLMError, Message, StopReason, TokenUsage,
};
use serde_json::json;
use std::sync::Arc;

mock! {
    Provider {}

    #[async_trait]
    impl saham_llm::LLMProvider for Provider {
        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, LLMError>;

        fn name(&self) -> &str;
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

fn canned_response(text: &str) -> CompletionResponse {
    CompletionResponse {
        message: Message::assistant(text),
        stop_reason: StopReason::EndTurn,
        usage: TokenUsage {
            input_tokens: 200,
            output_tokens: 100,
        },
    }
}

#[tokio::test]
async fn full_snapshot_flows_into_prompt() {
    let vars = with_defaults(&json!({
        "name": "Bank Central Asia",
        "sector": "Financial Services",
        "industry": "Banks - Regional",
        "current_price": 9850.0,
        "currency": "IDR",
        "market_cap": 1.2e15,
        "pe_ratio": 24.1,
        "dividend_yield": 0.021,
        "description": "Largest private bank in Indonesia.",
    }));

    let mut provider = MockProvider::new();
    provider
        .expect_complete()
        .withf(|request| {
            let prompt = request.messages[0].text();
            prompt.contains("Nama Perusahaan: Bank Central Asia")
                && prompt.contains("Sektor: Financial Services")
                && prompt.contains("Harga Saat Ini: 9850.0 IDR")
                && request.model == "gpt-4o-mini"
        })
        .times(1)
        .returning(|_| Ok(canned_response("Analisis lengkap BBCA.")));

    let summarizer = Summarizer::new(Arc::new(provider), config());
    let analysis = summarizer.summarize(&vars).await.unwrap();

    // The model's reply comes back verbatim
    assert_eq!(analysis, "Analisis lengkap BBCA.");
}

#[tokio::test]
async fn missing_fields_render_as_placeholder() {
    let vars = with_defaults(&json!({
        "name": "Mystery Corp",
        "current_price": 12.5,
    }));

    let mut provider = MockProvider::new();
    provider
        .expect_complete()
        .withf(|request| {
            let prompt = request.messages[0].text();
            prompt.contains("Dividend Yield: N/A")
                && prompt.contains("Sektor: N/A")
                && prompt.contains("Market Cap: N/A")
        })
        .times(1)
        .returning(|_| Ok(canned_response("ok")));

    let summarizer = Summarizer::new(Arc::new(provider), config());
    summarizer.summarize(&vars).await.unwrap();
}

#[tokio::test]
async fn generation_failure_keeps_error_prefix() {
    let mut provider = MockProvider::new();
    provider
        .expect_complete()
        .returning(|_| Err(LLMError::RateLimitExceeded("retry in 20s".to_string())));

    let summarizer = Summarizer::new(Arc::new(provider), config());
    let err = summarizer.summarize(&json!({})).await.unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.starts_with("Error analyzing stock: "));
    assert!(rendered.contains("retry in 20s"));
}
