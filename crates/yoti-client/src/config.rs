//! Yoti API client configuration.
//!
//! Holds the application's SDK id, its private key, and the API base URL.
//! Defaults point to production. Override via environment variables or
//! explicit construction for testing.

use url::Url;

use yoti_crypto::{load_private_key_file, CryptoError, RsaPrivateKey};

/// Production API base URL.
pub const DEFAULT_API_URL: &str = "https://api.yoti.com/api/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the Yoti API.
///
/// Custom `Debug` implementation redacts the private key.
#[derive(Clone)]
pub struct ClientConfig {
    /// Client SDK id issued by the Yoti Hub.
    pub sdk_id: String,
    /// Base URL of the API, including the `/api/v1` prefix.
    pub api_url: Url,
    /// The application's private key.
    pub key: RsaPrivateKey,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("sdk_id", &self.sdk_id)
            .field("api_url", &self.api_url)
            .field("key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration against the production API.
    pub fn new(sdk_id: impl Into<String>, key: RsaPrivateKey) -> Result<Self, ConfigError> {
        Ok(Self {
            sdk_id: sdk_id.into(),
            api_url: parse_url("api_url", DEFAULT_API_URL)?,
            key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `YOTI_CLIENT_SDK_ID` (required)
    /// - `YOTI_KEY_FILE_PATH` (required): PEM file, PKCS#1 or PKCS#8
    /// - `YOTI_API_URL` (default: `https://api.yoti.com/api/v1`)
    /// - `YOTI_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let sdk_id = required_var("YOTI_CLIENT_SDK_ID")?;
        let key_path = required_var("YOTI_KEY_FILE_PATH")?;
        let key = load_private_key_file(&key_path)?;

        Ok(Self {
            sdk_id,
            api_url: env_url("YOTI_API_URL", DEFAULT_API_URL)?,
            key,
            timeout_secs: std::env::var("YOTI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Point the configuration at another API base URL, e.g. a mock server.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, ConfigError> {
        self.api_url = parse_url("api_url", api_url)?;
        Ok(self)
    }
}

fn required_var(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(var))
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("unable to load private key: {0}")]
    Key(#[from] CryptoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use yoti_crypto::testing::test_key;

    #[test]
    fn new_uses_production_defaults() {
        let cfg = ClientConfig::new("sdk-id", test_key()).unwrap();
        assert_eq!(cfg.api_url.as_str(), "https://api.yoti.com/api/v1");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = ClientConfig::new("sdk-id", test_key()).unwrap();
        let debug = format!("{cfg:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("sdk-id"));
        assert!(!debug.contains("RsaPrivateKey"));
    }

    #[test]
    fn with_api_url_rejects_invalid_url() {
        let cfg = ClientConfig::new("sdk-id", test_key()).unwrap();
        assert!(matches!(
            cfg.with_api_url("not a url"),
            Err(ConfigError::InvalidUrl(..))
        ));
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("YOTI_NONEXISTENT_VAR_12345", "https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn required_var_reports_name() {
        let err = required_var("YOTI_NONEXISTENT_SDK_ID_12345").unwrap_err();
        assert_eq!(
            err.to_string(),
            "YOTI_NONEXISTENT_SDK_ID_12345 environment variable is required"
        );
    }
}
