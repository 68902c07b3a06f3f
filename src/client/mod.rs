//! HTTP client and service layer for the Alpha Research API.
//!
//! This module provides the main entry point [`AlphaClient`] for issuing
//! metered, pay-per-call requests against the Alpha Research API.
//!
//! # Example
//!
//! ```no_run
//! use alpha_research::AlphaClient;
//!
//! # async fn example() -> alpha_research::Result<()> {
//! // Reads PRIVATE_KEY and wires the x402 fetch once, at process start.
//! let client = AlphaClient::from_env()?;
//!
//! let trending = client.trending().list().await?;
//! println!("{} trending tokens", trending.data.coingecko.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::AlphaClient;
pub(crate) use http::ClientInner;
