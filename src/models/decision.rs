//! Trading decision records emitted by the agent loop.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

use super::Symbol;

/// The action a decision recommends. Exactly these three values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    /// Open or add to a long position
    Buy,
    /// Close or short
    Sell,
    /// Do nothing this cycle
    Hold,
}

impl TradeAction {
    /// Wire/display name (`BUY`, `SELL`, `HOLD`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "BUY",
            TradeAction::Sell => "SELL",
            TradeAction::Hold => "HOLD",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One trading decision for one symbol in one analysis cycle.
///
/// Decisions are logged and discarded; nothing in this crate persists or
/// executes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingDecision {
    /// The analyzed symbol
    pub symbol: Symbol,
    /// Recommended action
    pub action: TradeAction,
    /// Conviction in `[0, 1]`
    pub confidence: f64,
    /// Human-readable justification assembled from the signal chain
    pub reasoning: String,
}

impl TradingDecision {
    /// Create a decision, validating that confidence lies in `[0, 1]`.
    pub fn new(
        symbol: Symbol,
        action: TradeAction,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(Error::InvalidInput(format!(
                "confidence must be in [0, 1], got {confidence}"
            )));
        }
        Ok(Self {
            symbol,
            action,
            confidence,
            reasoning: reasoning.into(),
        })
    }

    /// Confidence as a whole percentage, for log lines.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

impl fmt::Display for TradingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}%)",
            self.symbol,
            self.action,
            self.confidence_percent()
        )
    }
}
