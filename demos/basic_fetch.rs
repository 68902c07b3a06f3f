//! Fetch token analysis, trending tokens, and sentiment one call at a time.
//!
//! Requires `PRIVATE_KEY` in the environment (or a `.env` file) and USDC on
//! Base to cover the per-call payments. Total cost: $0.12 USDC.
//!
//! Run with: cargo run --example basic_fetch

use alpha_research::{AlphaClient, Symbol};

#[tokio::main]
async fn main() -> alpha_research::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = AlphaClient::from_env()?;
    let symbol = Symbol::new("SOL");

    // $0.02
    let token = client.tokens().analyze_with_twitter(&symbol).await?;
    println!("=== {symbol} ===");
    println!("Price: ${}", token.data.price_display());
    println!("{}\n", token.data.analysis());

    // $0.02
    let trending = client.trending().list_with_twitter().await?;
    println!("=== Trending ===");
    for entry in trending.data.top(5) {
        println!(
            "{}: ${} ({:+}% vol)",
            entry.symbol,
            entry
                .price
                .map_or_else(|| "unknown".to_string(), |p| p.to_string()),
            entry.volume_change.unwrap_or(0.0),
        );
    }
    println!("{}\n", trending.data.narrative());

    // $0.08
    let sentiment = client.sentiment().for_symbol(&symbol).await?;
    println!("=== Sentiment ===");
    println!(
        "{} tweets analyzed:\n{}",
        sentiment.data.tweets_analyzed.unwrap_or(0),
        sentiment.data.sentiment_analysis
    );

    Ok(())
}
