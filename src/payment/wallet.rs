//! Wallet capability: signing x402 payment authorizations.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{Duration, Utc};
use k256::ecdsa::signature::Signer;
use k256::ecdsa::{Signature, SigningKey};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use crate::{Error, Result};

/// Environment variable holding the wallet private key (hex, `0x` optional).
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Seconds a signed authorization stays valid.
const AUTHORIZATION_TTL_SECS: i64 = 60;

/// Body of an HTTP 402 challenge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentChallenge {
    /// Protocol version advertised by the server
    #[serde(default)]
    pub x402_version: u32,
    /// Payment schemes the server accepts, in preference order
    #[serde(default)]
    pub accepts: Vec<PaymentRequirements>,
    /// Optional server-side error message
    #[serde(default)]
    pub error: Option<String>,
}

/// One accepted payment scheme from a 402 challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements {
    /// Payment scheme identifier (e.g. `exact`)
    pub scheme: String,
    /// Settlement network (e.g. `base`)
    pub network: String,
    /// Maximum amount the request may cost, in the asset's base units
    pub max_amount_required: String,
    /// Receiving address
    pub pay_to: String,
    /// Asset contract address (e.g. USDC on Base)
    pub asset: String,
    /// The resource being paid for
    #[serde(default)]
    pub resource: Option<String>,
    /// Human-readable description of the charge
    #[serde(default)]
    pub description: Option<String>,
}

/// A capability that turns payment requirements into an `X-PAYMENT` header
/// value. Implementations hold the key material; nothing else in the crate
/// sees it.
pub trait PaymentSigner: Send + Sync {
    /// Produce a payment authorization for the given requirements.
    fn authorize(&self, requirements: &PaymentRequirements) -> Result<String>;
}

/// A local secp256k1 wallet.
///
/// Signs payment authorizations with a private key supplied via the process
/// environment. Key custody beyond "read it from `PRIVATE_KEY`" is out of
/// scope; production agents should swap in a signer backed by real key
/// management.
pub struct LocalWallet {
    key: SigningKey,
}

impl LocalWallet {
    /// Build a wallet from the `PRIVATE_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(PRIVATE_KEY_ENV)
            .map_err(|_| Error::Config(format!("{PRIVATE_KEY_ENV} must be set")))?;
        let raw = SecretString::from(raw);
        Self::from_hex(raw.expose_secret())
    }

    /// Build a wallet from a hex-encoded private key (`0x` prefix optional).
    pub fn from_hex(key_hex: &str) -> Result<Self> {
        let key_hex = key_hex.trim().trim_start_matches("0x");
        let bytes = hex::decode(key_hex)
            .map_err(|e| Error::Config(format!("invalid private key hex: {e}")))?;
        let key = SigningKey::from_slice(&bytes)
            .map_err(|e| Error::Config(format!("invalid private key: {e}")))?;
        Ok(Self { key })
    }

    /// The wallet's address as a hex-encoded compressed public key.
    pub fn address(&self) -> String {
        let point = self.key.verifying_key().to_encoded_point(true);
        format!("0x{}", hex::encode(point.as_bytes()))
    }
}

impl PaymentSigner for LocalWallet {
    fn authorize(&self, requirements: &PaymentRequirements) -> Result<String> {
        let now = Utc::now();
        let authorization = json!({
            "from": self.address(),
            "to": requirements.pay_to,
            "asset": requirements.asset,
            "value": requirements.max_amount_required,
            "validUntil": (now + Duration::seconds(AUTHORIZATION_TTL_SECS)).timestamp(),
            "nonce": now.timestamp_micros(),
        });

        let message = serde_json::to_vec(&authorization)?;
        let signature: Signature = self.key.sign(&message);

        let payload = json!({
            "x402Version": 1,
            "scheme": requirements.scheme,
            "network": requirements.network,
            "payload": {
                "authorization": authorization,
                "signature": format!("0x{}", hex::encode(signature.to_bytes())),
            },
        });

        Ok(BASE64.encode(serde_json::to_vec(&payload)?))
    }
}

impl fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.address())
            .finish()
    }
}
