//! External data provider clients

pub mod yahoo;

pub use yahoo::{CompanyProfile, PriceBar, YahooFinanceClient};

use crate::error::Result;
use async_trait::async_trait;

/// Source of market data for one equity
///
/// Yahoo Finance is the production implementation; tests substitute their
/// own the same way `Summarizer` takes any `LLMProvider`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// The most recent daily price bar, or `None` when the symbol has no
    /// price history
    async fn latest_bar(&self, symbol: &str) -> Result<Option<PriceBar>>;

    /// Company metadata for the symbol
    async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile>;
}
