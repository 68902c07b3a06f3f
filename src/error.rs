//! Error types for the Alpha Research API client.
//!
//! This module provides a single error type covering all failure modes of a
//! metered API call: transport errors, payment failures surfaced by the x402
//! layer, and unexpected response shapes.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Alpha Research operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Alpha Research API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Payment was required but could not be completed (insufficient balance,
    /// rejected authorization, or an unusable challenge)
    #[error("Payment failed: {0}")]
    Payment(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (missing or malformed environment values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// Note that retrying a metered call bills again; the client itself
    /// never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` if this is a payment-related error.
    pub fn is_payment_error(&self) -> bool {
        matches!(self, Error::Payment(_))
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a response body.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let message = body
            .get("error")
            .and_then(|e| e.as_str())
            .or_else(|| body.get("message").and_then(|m| m.as_str()))
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            message,
            body,
        }
    }
}
