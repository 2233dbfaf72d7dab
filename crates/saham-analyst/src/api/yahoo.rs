//! Yahoo Finance API client
//!
//! Two read-only queries per ticker: the latest daily price bar through the
//! chart API (via `yahoo_finance_api`) and company metadata through the
//! `quoteSummary` endpoint.

use crate::api::MarketDataProvider;
use crate::error::{AnalystError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use yahoo_finance_api as yahoo;

const QUOTE_SUMMARY_BASE: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const QUOTE_SUMMARY_MODULES: &str = "price,assetProfile,summaryDetail";

// Yahoo rejects requests without a browser-like user agent
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/117.0";

/// Yahoo Finance API client
#[derive(Debug, Clone)]
pub struct YahooFinanceClient {
    http: Client,
}

/// One daily price bar
#[derive(Debug, Clone)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub adjclose: f64,
}

/// Company metadata from the quoteSummary endpoint
///
/// Every field is optional; Yahoo omits whatever it does not know about a
/// symbol and callers must cope with the gaps.
#[derive(Debug, Clone, Default)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub currency: Option<String>,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceClient {
    /// Get the most recent daily price bar for a symbol
    ///
    /// Returns `Ok(None)` when the symbol has no price history; any other
    /// provider failure is surfaced as `DataUnavailable` with the raised
    /// error's text.
    async fn latest_bar(&self, symbol: &str) -> Result<Option<PriceBar>> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| AnalystError::DataUnavailable(e.to_string()))?;

        let response = provider
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| AnalystError::DataUnavailable(e.to_string()))?;

        let bars = match response.quotes() {
            Ok(bars) => bars,
            Err(yahoo::YahooError::NoResult | yahoo::YahooError::NoQuotes) => return Ok(None),
            Err(e) => return Err(AnalystError::DataUnavailable(e.to_string())),
        };

        Ok(bars.last().map(|q| PriceBar {
            timestamp: DateTime::from_timestamp(q.timestamp as i64, 0).unwrap_or_else(Utc::now),
            open: q.open,
            high: q.high,
            low: q.low,
            close: q.close,
            volume: q.volume,
            adjclose: q.adjclose,
        }))
    }

    /// Get company metadata for a symbol
    async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let url = format!("{QUOTE_SUMMARY_BASE}/{symbol}");

        let response = self
            .http
            .get(&url)
            .query(&[("modules", QUOTE_SUMMARY_MODULES)])
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| AnalystError::DataUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalystError::DataUnavailable(format!(
                "quoteSummary HTTP error for {symbol}: {}",
                response.status()
            )));
        }

        let envelope: QuoteSummaryEnvelope = response
            .json()
            .await
            .map_err(|e| AnalystError::DataUnavailable(e.to_string()))?;

        let result = envelope
            .quote_summary
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| {
                AnalystError::DataUnavailable(format!(
                    "quoteSummary returned no result for {symbol}"
                ))
            })?;

        debug!("Fetched company profile for {symbol}");

        Ok(result.into_profile())
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// quoteSummary response models
//
// Numeric values arrive as {"raw": 123.45, "fmt": "123.45"} wrappers; only
// the raw value is used.
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryEnvelope {
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryResult {
    price: Option<PriceModule>,
    asset_profile: Option<AssetProfileModule>,
    summary_detail: Option<SummaryDetailModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceModule {
    long_name: Option<String>,
    short_name: Option<String>,
    currency: Option<String>,
    market_cap: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetProfileModule {
    sector: Option<String>,
    industry: Option<String>,
    long_business_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryDetailModule {
    #[serde(rename = "forwardPE")]
    forward_pe: Option<RawValue>,
    dividend_yield: Option<RawValue>,
    fifty_two_week_high: Option<RawValue>,
    fifty_two_week_low: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct RawValue {
    raw: Option<f64>,
}

impl QuoteSummaryResult {
    fn into_profile(self) -> CompanyProfile {
        let price = self.price;
        let profile = self.asset_profile;
        let detail = self.summary_detail;

        CompanyProfile {
            name: price
                .as_ref()
                .and_then(|p| p.long_name.clone().or_else(|| p.short_name.clone())),
            sector: profile.as_ref().and_then(|p| p.sector.clone()),
            industry: profile.as_ref().and_then(|p| p.industry.clone()),
            description: profile
                .as_ref()
                .and_then(|p| p.long_business_summary.clone()),
            currency: price.as_ref().and_then(|p| p.currency.clone()),
            market_cap: price.as_ref().and_then(|p| raw(&p.market_cap)),
            pe_ratio: detail.as_ref().and_then(|d| raw(&d.forward_pe)),
            dividend_yield: detail.as_ref().and_then(|d| raw(&d.dividend_yield)),
            fifty_two_week_high: detail.as_ref().and_then(|d| raw(&d.fifty_two_week_high)),
            fifty_two_week_low: detail.as_ref().and_then(|d| raw(&d.fifty_two_week_low)),
        }
    }
}

fn raw(value: &Option<RawValue>) -> Option<f64> {
    value.as_ref().and_then(|v| v.raw)
}
