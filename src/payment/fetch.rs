//! Payment-enabled fetch: the x402 challenge/response dance over reqwest.

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use url::Url;

use crate::client::ClientConfig;
use crate::{Error, Result};

use super::wallet::{PaymentChallenge, PaymentSigner};

/// Header carrying the signed payment authorization.
pub const PAYMENT_HEADER: &str = "X-PAYMENT";

/// The fetch capability every metered call goes through.
///
/// One call to [`get_json`](Self::get_json) is one billed request. The
/// client layer constructs URLs and parses envelopes; implementations of
/// this trait own transport and payment.
#[async_trait]
pub trait PaidFetch: Send + Sync {
    /// Perform a paid HTTP GET and return the parsed JSON body.
    async fn get_json(&self, url: &Url) -> Result<Value>;
}

/// Production [`PaidFetch`] implementation.
///
/// Issues a plain GET first. If the server answers 402 with a payment
/// challenge, asks the injected [`PaymentSigner`] for an authorization and
/// retries the request exactly once with the `X-PAYMENT` header attached.
/// No other retries are performed; transport timeouts come from the
/// underlying reqwest client.
pub struct X402Fetcher {
    http: reqwest::Client,
    wallet: Arc<dyn PaymentSigner>,
}

impl X402Fetcher {
    /// Build a fetcher from a wallet and client configuration.
    pub fn new(wallet: Arc<dyn PaymentSigner>, config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { http, wallet })
    }

    async fn parse_success(response: reqwest::Response) -> Result<Value> {
        Ok(response.json().await?)
    }

    async fn parse_failure(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        let body: Value = response.json().await.unwrap_or_default();
        Error::from_api_response(status, body)
    }
}

#[async_trait]
impl PaidFetch for X402Fetcher {
    async fn get_json(&self, url: &Url) -> Result<Value> {
        let response = self.http.get(url.clone()).send().await?;

        if response.status() != StatusCode::PAYMENT_REQUIRED {
            return if response.status().is_success() {
                Self::parse_success(response).await
            } else {
                Err(Self::parse_failure(response).await)
            };
        }

        // 402: sign the advertised requirements and retry once.
        let challenge: PaymentChallenge = response.json().await?;
        let requirements = challenge
            .accepts
            .first()
            .ok_or_else(|| Error::Payment("server offered no accepted payment scheme".into()))?;

        tracing::debug!(
            scheme = %requirements.scheme,
            network = %requirements.network,
            amount = %requirements.max_amount_required,
            "payment challenge received"
        );

        let header = self.wallet.authorize(requirements)?;
        let header = HeaderValue::from_str(&header)
            .map_err(|_| Error::Payment("authorization is not a valid header value".into()))?;

        let paid = self
            .http
            .get(url.clone())
            .header(PAYMENT_HEADER, header)
            .send()
            .await?;

        match paid.status() {
            status if status.is_success() => Self::parse_success(paid).await,
            StatusCode::PAYMENT_REQUIRED => {
                let body: Value = paid.json().await.unwrap_or_default();
                let reason = body
                    .get("error")
                    .and_then(|e| e.as_str())
                    .unwrap_or("authorization rejected")
                    .to_string();
                Err(Error::Payment(reason))
            }
            _ => Err(Self::parse_failure(paid).await),
        }
    }
}

impl fmt::Debug for X402Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X402Fetcher").finish_non_exhaustive()
    }
}
