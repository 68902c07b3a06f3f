//! Keyword sentiment classifier.

use crate::models::TradeAction;

/// Classified direction of a sentiment text.
///
/// Classification is case-insensitive substring containment of `"bullish"`
/// and `"bearish"`, not token matching, so substrings inside longer words
/// count. That false-positive risk is a known limitation of the heuristic
/// and is kept as-is. When both keywords occur, bullish wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentSignal {
    /// Text contains "bullish"
    Bullish,
    /// Text contains "bearish" and not "bullish"
    Bearish,
    /// Neither keyword present
    Neutral,
}

impl SentimentSignal {
    /// Classify a free-text sentiment analysis.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("bullish") {
            SentimentSignal::Bullish
        } else if lower.contains("bearish") {
            SentimentSignal::Bearish
        } else {
            SentimentSignal::Neutral
        }
    }

    /// The trade action this signal maps to.
    pub fn action(&self) -> TradeAction {
        match self {
            SentimentSignal::Bullish => TradeAction::Buy,
            SentimentSignal::Bearish => TradeAction::Sell,
            SentimentSignal::Neutral => TradeAction::Hold,
        }
    }

    /// Fixed conviction attached to this signal.
    pub fn confidence(&self) -> f64 {
        match self {
            SentimentSignal::Bullish => 0.7,
            SentimentSignal::Bearish => 0.6,
            SentimentSignal::Neutral => 0.5,
        }
    }

    /// Whether the signal is strong enough to justify the deep-research
    /// call.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, SentimentSignal::Neutral)
    }
}
