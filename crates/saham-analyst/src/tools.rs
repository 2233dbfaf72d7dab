//! Tool definitions for agentic callers

use saham_llm::tools::{ToolDefinition, schema};
use serde_json::json;

/// Tool definition for looking up stock data by ticker symbol
pub fn search_stock_tool() -> ToolDefinition {
    ToolDefinition::new(
        "search_stock",
        "Search for stock information using Yahoo Finance.",
        schema::object(
            json!({
                "symbol": schema::string("Ticker symbol to look up, e.g. AAPL or BBCA.JK"),
            }),
            vec!["symbol"],
        ),
    )
}
