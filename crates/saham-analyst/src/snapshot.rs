//! Normalized stock snapshot
//!
//! The snapshot is the fixed schema handed to the prompt: whatever the
//! provider returned, the nine display fields always exist after
//! default-filling, so the template never sees a hole.

use crate::api::{CompanyProfile, PriceBar};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Placeholder substituted for any display field the provider did not supply
pub const PLACEHOLDER: &str = "N/A";

/// The display fields guaranteed present after [`with_defaults`]
pub const DISPLAY_FIELDS: [&str; 9] = [
    "name",
    "sector",
    "industry",
    "current_price",
    "currency",
    "market_cap",
    "pe_ratio",
    "dividend_yield",
    "description",
];

/// A point-in-time view of one equity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSnapshot {
    /// Ticker symbol the snapshot was built for
    pub symbol: String,

    /// Closing price of the latest daily bar
    pub current_price: f64,

    /// When the latest bar was recorded
    pub as_of: DateTime<Utc>,

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

impl StockSnapshot {
    /// Combine a price bar and a company profile into a snapshot
    pub fn from_parts(symbol: impl Into<String>, bar: &PriceBar, profile: CompanyProfile) -> Self {
        Self {
            symbol: symbol.into(),
            current_price: bar.close,
            as_of: bar.timestamp,
            name: profile.name,
            sector: profile.sector,
            industry: profile.industry,
            description: profile.description,
            currency: profile.currency,
            market_cap: profile.market_cap,
            pe_ratio: profile.pe_ratio,
            dividend_yield: profile.dividend_yield,
            fifty_two_week_high: profile.fifty_two_week_high,
            fifty_two_week_low: profile.fifty_two_week_low,
        }
    }

    /// Build the prompt variable map, with every display field default-filled
    pub fn prompt_vars(&self) -> Value {
        let raw = json!({
            "name": self.name,
            "sector": self.sector,
            "industry": self.industry,
            "current_price": self.current_price,
            "currency": self.currency,
            "market_cap": self.market_cap,
            "pe_ratio": self.pe_ratio,
            "dividend_yield": self.dividend_yield,
            "description": self.description,
        });
        with_defaults(&raw)
    }
}

/// Replace missing or null display fields with [`PLACEHOLDER`]
///
/// Fields that already hold a value pass through untouched, so applying this
/// twice gives the same result as applying it once.
pub fn with_defaults(vars: &Value) -> Value {
    let mut out = match vars {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };

    for field in DISPLAY_FIELDS {
        let missing = matches!(out.get(field), None | Some(Value::Null));
        if missing {
            out.insert(field.to_string(), Value::String(PLACEHOLDER.to_string()));
        }
    }

    Value::Object(out)
}
