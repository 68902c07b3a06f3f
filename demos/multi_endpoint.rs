//! Assemble a combined intelligence record with a parallel fan-out.
//!
//! Token analysis, neural search, and sentiment are independent calls, so
//! the client issues them concurrently and joins all-or-nothing. Cost is
//! unchanged by the parallelism: $0.13 USDC total.
//!
//! Run with: cargo run --example multi_endpoint

use alpha_research::{AlphaClient, Symbol};

#[tokio::main]
async fn main() -> alpha_research::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = AlphaClient::from_env()?;
    let symbol = Symbol::new("SOL");

    let intel = client.full_intelligence(&symbol).await?;

    println!("=== {} intelligence ===", intel.symbol);
    println!(
        "Price: {}",
        intel
            .token
            .price
            .map_or_else(|| "unknown".to_string(), |p| format!("${p}"))
    );
    println!("Analysis: {}", intel.token.analysis);
    println!(
        "Research: {} sources. {}",
        intel.research.sources_found, intel.research.summary
    );
    println!(
        "Sentiment ({} tweets): {}",
        intel.sentiment.tweets_analyzed, intel.sentiment.analysis
    );

    Ok(())
}
