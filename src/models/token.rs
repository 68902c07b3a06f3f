//! Token analysis models for `/alpha/token`.

use serde::{Deserialize, Serialize};

/// Placeholder used when no upstream provider reports a price.
pub const UNKNOWN_PRICE: &str = "unknown";

/// Response envelope for `/alpha/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Endpoint-specific payload
    pub data: TokenData,
}

/// Token analysis payload.
///
/// Upstream aggregates several data providers and populates whichever
/// sub-objects it has for the token. Listed tokens usually carry a
/// `coingecko` quote; long-tail DEX tokens often only carry `dexscreener`.
/// Callers should use the fallback accessors rather than reading providers
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenData {
    /// CoinGecko quote, if the token is listed there
    #[serde(default)]
    pub coingecko: Option<ProviderQuote>,
    /// DexScreener quote, if the token trades on a tracked DEX
    #[serde(default)]
    pub dexscreener: Option<ProviderQuote>,
    /// AI-generated analysis with trading signals
    #[serde(default)]
    pub grok_analysis: Option<String>,
}

/// A single provider's price snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderQuote {
    /// Spot price in USD
    #[serde(default)]
    pub price: Option<f64>,
    /// 24h trading volume in USD
    #[serde(default, rename = "volume24h")]
    pub volume_24h: Option<f64>,
}

impl TokenData {
    /// Spot price, preferring CoinGecko and falling back to DexScreener.
    pub fn price(&self) -> Option<f64> {
        self.coingecko
            .as_ref()
            .and_then(|q| q.price)
            .or_else(|| self.dexscreener.as_ref().and_then(|q| q.price))
    }

    /// 24h volume with the same provider fallback as [`price`](Self::price).
    pub fn volume_24h(&self) -> Option<f64> {
        self.coingecko
            .as_ref()
            .and_then(|q| q.volume_24h)
            .or_else(|| self.dexscreener.as_ref().and_then(|q| q.volume_24h))
    }

    /// Price formatted for display, with the `"unknown"` placeholder when
    /// no provider reports one.
    pub fn price_display(&self) -> String {
        match self.price() {
            Some(price) => price.to_string(),
            None => UNKNOWN_PRICE.to_string(),
        }
    }

    /// AI analysis text, with a fixed fallback when absent.
    pub fn analysis(&self) -> &str {
        self.grok_analysis
            .as_deref()
            .unwrap_or("No analysis available")
    }
}
