//! Stock data acquisition
//!
//! Fetch order matters: the price bar is queried first because a symbol with
//! no price history means "no data found", regardless of whether Yahoo knows
//! the company's name.

use crate::api::{MarketDataProvider, YahooFinanceClient};
use crate::error::{AnalystError, Result};
use crate::snapshot::StockSnapshot;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Fetches and normalizes stock data into snapshots
pub struct StockFetcher {
    client: Arc<dyn MarketDataProvider>,
}

impl StockFetcher {
    /// Create a fetcher backed by Yahoo Finance
    pub fn new() -> Self {
        Self::with_provider(Arc::new(YahooFinanceClient::new()))
    }

    /// Create a fetcher backed by an arbitrary data source
    pub fn with_provider(client: Arc<dyn MarketDataProvider>) -> Self {
        Self { client }
    }

    /// Fetch a snapshot for a ticker symbol
    ///
    /// # Errors
    ///
    /// Returns `NoData` when the symbol has no price history and
    /// `DataUnavailable` when a provider query fails.
    #[instrument(skip(self))]
    pub async fn fetch(&self, symbol: &str) -> Result<StockSnapshot> {
        let bar = self
            .client
            .latest_bar(symbol)
            .await?
            .ok_or_else(|| AnalystError::NoData(symbol.to_string()))?;

        let profile = self.client.company_profile(symbol).await?;

        debug!(
            close = bar.close,
            name = profile.name.as_deref().unwrap_or("?"),
            "Built snapshot for {symbol}"
        );

        Ok(StockSnapshot::from_parts(symbol, &bar, profile))
    }
}

impl Default for StockFetcher {
    fn default() -> Self {
        Self::new()
    }
}
