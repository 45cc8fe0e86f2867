//! # yoti-client -- Async client for the Yoti profile API
//!
//! Exchanges the one-time-use token a user hands to the application for
//! the shared profile:
//!
//! 1. The token is RSA-decrypted with the application key.
//! 2. `GET /profile/{token}?appId={sdk_id}` is sent as a [`SignedRequest`]
//!    with the application's public key in `X-Yoti-Auth-Key`.
//! 3. The returned receipt is decoded by `yoti-profile` into
//!    [`ActivityDetails`].
//!
//! ## Architecture
//!
//! The client holds only its immutable [`ClientConfig`] and a cloneable
//! `reqwest::Client`. Share it by reference or clone it per task; there is
//! no global state and no retry.

pub mod config;
pub mod error;
pub mod profile;
pub mod request;

pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use request::SignedRequest;
pub use yoti_profile::ActivityDetails;

use std::time::Duration;

/// Yoti API client.
#[derive(Debug, Clone)]
pub struct YotiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl YotiClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Start a signed request against the configured API.
    pub fn request(&self) -> request::SignedRequestBuilder<'_> {
        SignedRequest::builder(&self.config.key, self.config.api_url.clone())
    }
}
