//! # alpha-research
//!
//! An async Rust client for the Alpha Research API, a paid trading
//! intelligence service where every call is authenticated by an x402
//! per-request micropayment.
//!
//! The crate wraps a payment-enabled fetch capability: each request is a
//! plain HTTP GET, and when the server answers 402 the fetcher signs the
//! advertised payment requirements with a wallet and retries once with the
//! `X-PAYMENT` header. Everything above that seam is ordinary typed API
//! plumbing.
//!
//! ## Features
//!
//! - **Metered endpoint services**: token analysis, trending, sentiment,
//!   neural search, and deep research, each a typed method with its cost
//!   documented
//! - **Explicit dependency injection**: the fetch capability is built once
//!   and passed in; tests inject scripted fetchers through the same seam
//! - **Typed actions**: a closed enumeration of agent actions with typed
//!   input extractors, replacing duck-typed plugin handlers
//! - **Reference trading loop**: a cancellable fixed-interval agent that
//!   chains trending, sentiment, and conditional deep research into
//!   per-token decisions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alpha_research::{AlphaClient, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> alpha_research::Result<()> {
//!     // Requires PRIVATE_KEY in the environment and USDC on Base.
//!     let client = AlphaClient::from_env()?;
//!
//!     // $0.02 USDC
//!     let token = client.tokens().analyze(&Symbol::new("SOL")).await?;
//!     println!("SOL: ${}", token.data.price_display());
//!
//!     // Independent calls fan out in parallel; $0.13 USDC total.
//!     let intel = client.full_intelligence(&Symbol::new("SOL")).await?;
//!     println!("{} sources, {} tweets",
//!         intel.research.sources_found,
//!         intel.sentiment.tweets_analyzed);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Decision Loop
//!
//! ```rust,no_run
//! use alpha_research::AlphaClient;
//! use alpha_research::agent::{MarketAnalyzer, TradingLoop};
//!
//! #[tokio::main]
//! async fn main() -> alpha_research::Result<()> {
//!     let client = AlphaClient::from_env()?;
//!     let market_loop = TradingLoop::new(MarketAnalyzer::new(client));
//!
//!     let (task, handle) = market_loop.spawn();
//!     tokio::signal::ctrl_c().await.ok();
//!     handle.stop();
//!     task.await.ok();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod actions;
pub mod agent;
pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod payment;

// Re-export primary types at crate root for convenience
pub use client::{AlphaClient, ClientConfig};
pub use error::{Error, Result};
pub use models::{Symbol, TradeAction, TradingDecision};
pub use payment::{LocalWallet, PaidFetch, PaymentSigner};

/// Prelude module for convenient imports.
///
/// ```rust
/// use alpha_research::prelude::*;
/// ```
pub mod prelude {
    pub use crate::actions::{ActionKind, ActionReply, ActionRequest};
    pub use crate::agent::{MarketAnalyzer, SentimentSignal, TradingLoop};
    pub use crate::client::{AlphaClient, ClientConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        DeepResponse, SearchResponse, SentimentResponse, Symbol, TokenIntelligence, TokenResponse,
        TradeAction, TradingDecision, TrendingResponse,
    };
    pub use crate::payment::{LocalWallet, PaidFetch, PaymentSigner, X402Fetcher};
}
