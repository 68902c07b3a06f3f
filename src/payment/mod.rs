//! The x402 payment layer.
//!
//! Every Alpha Research call is billed per request. This module provides the
//! two capabilities the client is generic over:
//!
//! - [`PaidFetch`] - "perform an HTTP GET that resolves to parsed JSON,
//!   attaching payment when challenged". The rest of the crate only ever
//!   talks to this trait, so tests inject scripted fetchers and the real
//!   wiring happens once at process start.
//! - [`PaymentSigner`] - the wallet capability that turns a 402 challenge
//!   into an `X-PAYMENT` header value.
//!
//! [`X402Fetcher`] is the production implementation: plain GET, and on an
//! HTTP 402 it signs the advertised payment requirements and retries the
//! request exactly once.

mod fetch;
mod wallet;

pub use fetch::{PaidFetch, X402Fetcher, PAYMENT_HEADER};
pub use wallet::{LocalWallet, PaymentChallenge, PaymentRequirements, PaymentSigner};
