//! The end-to-end analysis pipeline

use crate::config::AnalystConfig;
use crate::error::Result;
use crate::fetcher::StockFetcher;
use crate::summarizer::Summarizer;
use saham_llm::LLMProvider;
use std::sync::Arc;
use tracing::{info, instrument};

/// Fetches stock data and produces a written analysis
pub struct StockAnalyst {
    fetcher: StockFetcher,
    summarizer: Summarizer,
}

impl StockAnalyst {
    /// Create an analyst backed by the given provider and configuration
    pub fn new(provider: Arc<dyn LLMProvider>, config: Arc<AnalystConfig>) -> Self {
        Self {
            fetcher: StockFetcher::new(),
            summarizer: Summarizer::new(provider, config),
        }
    }

    /// Analyze a ticker symbol
    ///
    /// Runs the full pipeline: fetch, default-fill, render, generate. The
    /// returned string is the model's reply verbatim.
    ///
    /// # Errors
    ///
    /// `NoData` when the symbol has no price history, `DataUnavailable` when
    /// a provider query fails, `Generation` when rendering or the model call
    /// fails.
    #[instrument(skip(self))]
    pub async fn analyze(&self, ticker: &str) -> Result<String> {
        let snapshot = self.fetcher.fetch(ticker).await?;
        info!(
            price = snapshot.current_price,
            "Fetched snapshot for {ticker}"
        );

        let vars = snapshot.prompt_vars();
        self.summarizer.summarize(&vars).await
    }
}
