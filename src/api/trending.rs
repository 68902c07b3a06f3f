//! Trending tokens service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::TrendingResponse;
use crate::Result;

/// Service for trending tokens (`/alpha/trending`).
///
/// Returns a ranked token list with AI narrative detection.
pub struct TrendingService {
    inner: Arc<ClientInner>,
}

impl TrendingService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the ranked trending token list. $0.02 per call.
    pub async fn list(&self) -> Result<TrendingResponse> {
        self.inner.get("/alpha/trending", &[]).await
    }

    /// Like [`list`](Self::list), with the X/Twitter addon enabled.
    pub async fn list_with_twitter(&self) -> Result<TrendingResponse> {
        self.inner
            .get("/alpha/trending", &[("twitter", "true")])
            .await
    }
}
