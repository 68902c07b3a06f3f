//! X/Twitter sentiment service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{SentimentResponse, Symbol};
use crate::Result;

/// Service for sentiment analysis (`/alpha/sentiment`).
///
/// The most expensive routine call in the API after deep research; callers
/// chaining it per token should budget accordingly.
pub struct SentimentService {
    inner: Arc<ClientInner>,
}

impl SentimentService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Analyze sentiment for an arbitrary query. $0.08 per call.
    pub async fn query(&self, query: &str) -> Result<SentimentResponse> {
        self.inner
            .get("/alpha/sentiment", &[("query", query)])
            .await
    }

    /// Analyze sentiment for a token by cashtag (`$SOL`). $0.08 per call.
    pub async fn for_symbol(&self, symbol: &Symbol) -> Result<SentimentResponse> {
        self.query(&symbol.cashtag()).await
    }
}
