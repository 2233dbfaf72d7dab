//! Stock analysis pipeline for saham-rs
//!
//! This crate fetches public equity data for a ticker symbol and produces a
//! natural-language investment summary in Bahasa Indonesia through a hosted
//! language model. The pipeline is a strict sequence with no state between
//! requests:
//!
//! 1. `StockFetcher` queries Yahoo Finance for company metadata and the
//!    latest daily price bar and builds a [`StockSnapshot`]
//! 2. The snapshot's display fields are default-filled with `"N/A"`
//! 3. `Summarizer` renders the fixed analysis prompt and sends it to the
//!    configured LLM provider, returning the generated text verbatim
//!
//! # Example
//!
//! ```rust,ignore
//! use saham_analyst::{AnalystConfig, StockAnalyst};
//! use saham_llm::providers::OpenAIProvider;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(AnalystConfig::from_env()?);
//!     let provider = Arc::new(OpenAIProvider::new(config.openai_api_key.clone())?);
//!
//!     let analyst = StockAnalyst::new(provider, config);
//!     let analysis = analyst.analyze("BBCA.JK").await?;
//!     println!("{analysis}");
//!
//!     Ok(())
//! }
//! ```

pub mod analyst;
pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod prompts;
pub mod snapshot;
pub mod summarizer;
pub mod tools;

// Re-export main types for convenience
pub use analyst::StockAnalyst;
pub use api::MarketDataProvider;
pub use config::AnalystConfig;
pub use error::{AnalystError, Result};
pub use fetcher::StockFetcher;
pub use snapshot::{StockSnapshot, with_defaults};
pub use summarizer::Summarizer;
pub use tools::search_stock_tool;

// Re-export Language from saham-prompt
pub use saham_prompt::Language;
