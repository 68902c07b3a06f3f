//! Neural search and deep research service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{DeepResponse, SearchResponse};
use crate::Result;

/// Service for search and deep research (`/alpha/search`, `/alpha/deep`).
///
/// # Example
///
/// ```no_run
/// # async fn example(client: alpha_research::AlphaClient) -> alpha_research::Result<()> {
/// let results = client.research().search("Eigenlayer restaking").await?;
/// println!("{}", results.data.summary_text());
/// for hit in results.data.top_hits(3) {
///     println!("- {}: {}", hit.title, hit.url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ResearchService {
    inner: Arc<ClientInner>,
}

impl ResearchService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Quick neural search with AI summary. $0.03 per call.
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.inner.get("/alpha/search", &[("query", query)]).await
    }

    /// Full multi-source deep research. $0.15 per call, the most expensive
    /// endpoint; callers gate it behind cheaper signals.
    pub async fn deep(&self, query: &str) -> Result<DeepResponse> {
        self.inner.get("/alpha/deep", &[("query", query)]).await
    }
}
