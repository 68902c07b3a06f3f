//! X/Twitter sentiment models for `/alpha/sentiment`.

use serde::{Deserialize, Serialize};

/// Response envelope for `/alpha/sentiment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResponse {
    /// Endpoint-specific payload
    pub data: SentimentData,
    /// The query as interpreted by the server
    #[serde(default)]
    pub query: Option<String>,
}

/// Sentiment payload derived from recent posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentData {
    /// Number of posts analyzed
    #[serde(default)]
    pub tweets_analyzed: Option<u64>,
    /// Free-text sentiment analysis
    pub sentiment_analysis: String,
    /// Total likes across analyzed posts
    #[serde(default)]
    pub total_likes: Option<u64>,
    /// Total retweets across analyzed posts
    #[serde(default)]
    pub total_retweets: Option<u64>,
}
