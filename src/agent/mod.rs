//! The trading agent: sentiment classification, per-cycle market analysis,
//! and the scheduled decision loop.
//!
//! This is the reference pattern for chaining metered endpoints: a cheap
//! ranked list first, a mid-priced signal per candidate, and the expensive
//! deep-research call only when the mid-priced signal is conclusive.

mod analyzer;
mod classifier;
mod runner;

pub use analyzer::{MarketAnalyzer, TOP_MOVERS};
pub use classifier::SentimentSignal;
pub use runner::{LoopHandle, TradingLoop, DEFAULT_INTERVAL};
