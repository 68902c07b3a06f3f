//! Token analysis service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Symbol, TokenResponse};
use crate::Result;

/// Service for token analysis (`/alpha/token`).
///
/// # Example
///
/// ```no_run
/// # async fn example(client: alpha_research::AlphaClient) -> alpha_research::Result<()> {
/// use alpha_research::Symbol;
///
/// let response = client.tokens().analyze(&Symbol::new("SOL")).await?;
/// println!("price: ${}", response.data.price_display());
/// println!("{}", response.data.analysis());
/// # Ok(())
/// # }
/// ```
pub struct TokensService {
    inner: Arc<ClientInner>,
}

impl TokensService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get AI-powered analysis for a token. $0.02 per call.
    pub async fn analyze(&self, symbol: &Symbol) -> Result<TokenResponse> {
        self.inner
            .get("/alpha/token", &[("symbol", symbol.as_str())])
            .await
    }

    /// Like [`analyze`](Self::analyze), with the X/Twitter addon enabled.
    pub async fn analyze_with_twitter(&self, symbol: &Symbol) -> Result<TokenResponse> {
        self.inner
            .get(
                "/alpha/token",
                &[("symbol", symbol.as_str()), ("twitter", "true")],
            )
            .await
    }
}
