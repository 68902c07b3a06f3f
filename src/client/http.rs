//! HTTP client implementation for the Alpha Research API.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use crate::api::{ResearchService, SentimentService, TokensService, TrendingService};
use crate::models::{Symbol, TokenIntelligence};
use crate::payment::{LocalWallet, PaidFetch, PaymentSigner, X402Fetcher};
use crate::Result;

use super::config::ClientConfig;

/// The main client for the Alpha Research API.
///
/// The client owns the injected pay-per-call fetch capability and exposes
/// one service struct per endpoint family. It does endpoint/path
/// construction only; payment and transport live behind [`PaidFetch`].
///
/// Cloning is cheap and shares the underlying capability. Construct once at
/// process start and pass the clone to every call site.
///
/// # Example
///
/// ```no_run
/// use alpha_research::{AlphaClient, Symbol};
///
/// # async fn example() -> alpha_research::Result<()> {
/// let client = AlphaClient::from_env()?;
///
/// // $0.02 per call
/// let token = client.tokens().analyze(&Symbol::new("SOL")).await?;
/// println!("SOL: ${}", token.data.price_display());
/// # Ok(())
/// # }
/// ```
pub struct AlphaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) fetch: Arc<dyn PaidFetch>,
    pub(crate) config: ClientConfig,
}

impl AlphaClient {
    /// Create a client over an already-built fetch capability.
    ///
    /// This is the seam tests use to inject scripted fetchers.
    pub fn with_fetch(fetch: Arc<dyn PaidFetch>, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner { fetch, config }),
        }
    }

    /// Create a client from a wallet capability, wiring the x402 fetcher.
    pub fn with_wallet(wallet: Arc<dyn PaymentSigner>, config: ClientConfig) -> Result<Self> {
        let fetch = X402Fetcher::new(wallet, &config)?;
        Ok(Self::with_fetch(Arc::new(fetch), config))
    }

    /// Create a client from the process environment.
    ///
    /// Reads `PRIVATE_KEY`, builds a [`LocalWallet`], and wires the default
    /// configuration. This is the one place wallet wiring happens; the
    /// resulting client is passed explicitly everywhere else.
    pub fn from_env() -> Result<Self> {
        let wallet = LocalWallet::from_env()?;
        Self::with_wallet(Arc::new(wallet), ClientConfig::default())
    }

    /// Get the token analysis service (`/alpha/token`, $0.02/call).
    pub fn tokens(&self) -> TokensService {
        TokensService::new(self.inner.clone())
    }

    /// Get the trending service (`/alpha/trending`, $0.02/call).
    pub fn trending(&self) -> TrendingService {
        TrendingService::new(self.inner.clone())
    }

    /// Get the sentiment service (`/alpha/sentiment`, $0.08/call).
    pub fn sentiment(&self) -> SentimentService {
        SentimentService::new(self.inner.clone())
    }

    /// Get the search/deep-research service (`/alpha/search` $0.03,
    /// `/alpha/deep` $0.15).
    pub fn research(&self) -> ResearchService {
        ResearchService::new(self.inner.clone())
    }

    /// Fetch token analysis, neural search, and sentiment for one symbol as
    /// a parallel fan-out, joined all-or-nothing.
    ///
    /// The three calls are independent, so they are issued concurrently to
    /// overlap network latency; total cost is unchanged ($0.13). If any one
    /// call fails the whole operation fails.
    pub async fn full_intelligence(&self, symbol: &Symbol) -> Result<TokenIntelligence> {
        let tokens = self.tokens();
        let research = self.research();
        let sentiment_service = self.sentiment();
        let query = format!("{symbol} crypto analysis");
        let (token, search, sentiment) = tokio::try_join!(
            tokens.analyze(symbol),
            research.search(&query),
            sentiment_service.for_symbol(symbol),
        )?;

        Ok(TokenIntelligence::assemble(
            symbol.clone(),
            token,
            search,
            sentiment,
        ))
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Build the full endpoint URL with percent-encoded query parameters.
    ///
    /// Call sites pass a fixed slice of pairs, so no parameter is ever
    /// duplicated.
    pub(crate) fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.config.base_url.join(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    /// Perform one metered GET and deserialize the response envelope.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.endpoint_url(path, params)?;
        tracing::debug!(%url, "metered GET");
        let body = self.fetch.get_json(&url).await?;
        Ok(serde_json::from_value(body)?)
    }
}

impl Clone for AlphaClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for AlphaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
