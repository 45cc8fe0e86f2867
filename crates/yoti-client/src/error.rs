//! Yoti API client error types.

use yoti_crypto::CryptoError;
use yoti_profile::ReceiptError;

/// Errors from Yoti API calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Token decryption, key encoding or request signing failed.
    #[error("cryptographic error: {0}")]
    Crypto(#[from] CryptoError),
    /// The request could not be assembled.
    #[error("invalid request to {endpoint}: {reason}")]
    InvalidRequest { endpoint: String, reason: String },
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status.
    #[error("Yoti API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The receipt was fetched but could not be decoded.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
