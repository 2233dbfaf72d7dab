//! saham - stock analysis from the command line
//!
//! Reads a ticker symbol (from the command line or interactively from
//! stdin), fetches its data from Yahoo Finance and prints a generated
//! analysis in Bahasa Indonesia.

use anyhow::{Context, Result};
use clap::Parser;
use saham_analyst::{AnalystConfig, StockAnalyst};
use saham_llm::providers::{OpenAIConfig, OpenAIProvider};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "saham", version, about = "Analisis saham berbasis LLM")]
struct Args {
    /// Ticker symbol to analyze; prompts on stdin when omitted
    ticker: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    saham_utils::init_tracing();

    let args = Args::parse();

    let config = Arc::new(AnalystConfig::from_env().context("failed to load configuration")?);
    debug!(model = %config.model, "Configuration loaded");

    let mut openai = OpenAIConfig::new(config.openai_api_key.clone())
        .with_timeout(config.request_timeout.as_secs());
    if let Some(api_base) = &config.api_base {
        openai = openai.with_api_base(api_base.clone());
    }
    let provider = Arc::new(OpenAIProvider::with_config(openai)?);

    let analyst = StockAnalyst::new(provider, config);

    let ticker = match args.ticker {
        Some(ticker) => ticker,
        None => read_ticker()?,
    };
    let ticker = ticker.trim().to_uppercase();

    println!("\nAnalisis untuk {ticker}:");
    match analyst.analyze(&ticker).await {
        Ok(analysis) => println!("{analysis}"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

fn read_ticker() -> Result<String> {
    print!("Masukkan nama ticker saham: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read ticker from stdin")?;

    Ok(line)
}
