//! Trending token models for `/alpha/trending`.

use serde::{Deserialize, Serialize};

use super::Symbol;

/// Response envelope for `/alpha/trending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    /// Endpoint-specific payload
    pub data: TrendingData,
}

/// Trending payload: a ranked token list plus an AI narrative summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingData {
    /// Ranked trending tokens (best first)
    #[serde(default)]
    pub coingecko: Vec<TrendingToken>,
    /// AI-detected narrative across the trending set
    #[serde(default)]
    pub narrative_summary: Option<String>,
}

/// One entry in the ranked trending list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingToken {
    /// Ticker symbol
    pub symbol: Symbol,
    /// Spot price in USD
    #[serde(default)]
    pub price: Option<f64>,
    /// 24h volume change in percent
    #[serde(default)]
    pub volume_change: Option<f64>,
}

impl TrendingData {
    /// The top `n` ranked tokens.
    pub fn top(&self, n: usize) -> &[TrendingToken] {
        &self.coingecko[..self.coingecko.len().min(n)]
    }

    /// Narrative summary text, empty when upstream has none.
    pub fn narrative(&self) -> &str {
        self.narrative_summary.as_deref().unwrap_or("")
    }
}
