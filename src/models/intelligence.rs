//! Combined intelligence record assembled from a parallel fan-out.

use serde::{Deserialize, Serialize};

use super::{SearchResponse, SentimentResponse, Symbol, TokenResponse};

/// Everything the API knows about one token, assembled from the token,
/// search, and sentiment endpoints issued in parallel.
///
/// Built by [`AlphaClient::full_intelligence`](crate::AlphaClient::full_intelligence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenIntelligence {
    /// The queried symbol
    pub symbol: Symbol,
    /// Price/volume/analysis snapshot
    pub token: TokenSnapshot,
    /// Search result snapshot
    pub research: ResearchSnapshot,
    /// Sentiment snapshot
    pub sentiment: SentimentSnapshot,
}

/// Price and analysis extracted from the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSnapshot {
    /// Spot price, provider fallback already applied
    pub price: Option<f64>,
    /// 24h volume, provider fallback already applied
    pub volume_24h: Option<f64>,
    /// AI analysis text (fallback text when upstream has none)
    pub analysis: String,
}

/// Counts and summary extracted from the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchSnapshot {
    /// Number of indexed sources found
    pub sources_found: u64,
    /// AI summary of the results
    pub summary: String,
}

/// Counts and analysis extracted from the sentiment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    /// Number of posts analyzed
    pub tweets_analyzed: u64,
    /// Free-text sentiment analysis
    pub analysis: String,
}

impl TokenIntelligence {
    /// Assemble the combined record from the three joined responses.
    pub(crate) fn assemble(
        symbol: Symbol,
        token: TokenResponse,
        search: SearchResponse,
        sentiment: SentimentResponse,
    ) -> Self {
        Self {
            symbol,
            token: TokenSnapshot {
                price: token.data.price(),
                volume_24h: token.data.volume_24h(),
                analysis: token.data.analysis().to_string(),
            },
            research: ResearchSnapshot {
                sources_found: search.data.results_found(),
                summary: search.data.summary_text().to_string(),
            },
            sentiment: SentimentSnapshot {
                tweets_analyzed: sentiment.data.tweets_analyzed.unwrap_or(0),
                analysis: sentiment.data.sentiment_analysis,
            },
        }
    }
}
