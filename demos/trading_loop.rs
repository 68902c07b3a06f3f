//! Run the reference trading loop until Ctrl-C.
//!
//! Each 5 minute cycle costs $0.26 to $0.71 USDC depending on how many of
//! the top movers carry an actionable sentiment signal. Decisions are
//! logged, never executed.
//!
//! Run with: cargo run --example trading_loop

use alpha_research::agent::{MarketAnalyzer, TradingLoop};
use alpha_research::AlphaClient;

#[tokio::main]
async fn main() -> alpha_research::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = AlphaClient::from_env()?;
    let market_loop = TradingLoop::new(MarketAnalyzer::new(client));

    let (task, handle) = market_loop.spawn();
    tracing::info!("trading loop running, Ctrl-C to stop");

    tokio::signal::ctrl_c().await.ok();
    handle.stop();
    task.await.ok();

    Ok(())
}
