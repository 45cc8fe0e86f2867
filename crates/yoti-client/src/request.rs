//! # Signed Requests
//!
//! Every call to the Yoti API is authenticated by signing the request
//! itself. The builder adds a random `nonce` and a millisecond `timestamp`
//! to the query, sorts the parameters, and signs the message
//!
//! ```text
//! METHOD&/endpoint?sorted_query[&base64(body)]
//! ```
//!
//! with the application key. The signature travels in
//! `X-Yoti-Auth-Digest`. The endpoint is signed relative to the base URL,
//! so `/api/v1` is not part of the message.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;
use uuid::Uuid;

use yoti_crypto::encoding::encode_standard;
use yoti_crypto::{sign_digest, RsaPrivateKey};

use crate::error::ClientError;

pub const AUTH_DIGEST_HEADER: &str = "X-Yoti-Auth-Digest";
pub const AUTH_KEY_HEADER: &str = "X-Yoti-Auth-Key";
pub const SDK_HEADER: &str = "X-Yoti-SDK";
pub const SDK_VERSION_HEADER: &str = "X-Yoti-SDK-Version";

const SDK_IDENTIFIER: &str = "Rust";

/// A request ready to send, with its digest header attached.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl SignedRequest {
    pub fn builder(key: &RsaPrivateKey, base_url: Url) -> SignedRequestBuilder<'_> {
        SignedRequestBuilder {
            key,
            base_url,
            method: Method::GET,
            endpoint: String::new(),
            params: BTreeMap::new(),
            headers: Vec::new(),
            body: None,
            nonce: None,
            timestamp_ms: None,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Attach this request to an HTTP client.
    pub fn into_request(self, http: &reqwest::Client) -> reqwest::RequestBuilder {
        let builder = http.request(self.method, self.url).headers(self.headers);
        match self.body {
            Some(body) => builder.body(body),
            None => builder,
        }
    }
}

/// Builder for [`SignedRequest`].
#[derive(Debug)]
pub struct SignedRequestBuilder<'a> {
    key: &'a RsaPrivateKey,
    base_url: Url,
    method: Method,
    endpoint: String,
    params: BTreeMap<String, String>,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    nonce: Option<String>,
    timestamp_ms: Option<i64>,
}

impl<'a> SignedRequestBuilder<'a> {
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Path relative to the base URL, starting with `/`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// JSON request body. Its base64 is part of the signed message.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Fix the nonce instead of generating a UUID v4.
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Fix the timestamp instead of reading the clock.
    pub fn timestamp_ms(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    pub fn build(self) -> Result<SignedRequest, ClientError> {
        let invalid = |reason: String| ClientError::InvalidRequest {
            endpoint: self.endpoint.clone(),
            reason,
        };

        if !self.endpoint.starts_with('/') {
            return Err(invalid("endpoint must start with '/'".into()));
        }

        let mut params = self.params.clone();
        params.insert(
            "nonce".into(),
            self.nonce.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
        );
        params.insert(
            "timestamp".into(),
            self.timestamp_ms
                .unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
                .to_string(),
        );

        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        let path_and_query = format!("{}?{query}", self.endpoint);

        let message = digest_message(&self.method, &path_and_query, self.body.as_deref());
        let digest = sign_digest(message.as_bytes(), self.key)?;

        let url = Url::parse(&format!(
            "{}{path_and_query}",
            self.base_url.as_str().trim_end_matches('/')
        ))
        .map_err(|e| invalid(format!("invalid URL: {e}")))?;

        let mut headers = HeaderMap::new();
        let mut insert = |name: &str, value: &str| -> Result<(), ClientError> {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| invalid(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| invalid(format!("invalid value for header {name}: {e}")))?;
            headers.insert(name, value);
            Ok(())
        };
        insert(AUTH_DIGEST_HEADER, &digest)?;
        insert(SDK_HEADER, SDK_IDENTIFIER)?;
        insert(
            SDK_VERSION_HEADER,
            &format!("{SDK_IDENTIFIER}-{}", env!("CARGO_PKG_VERSION")),
        )?;
        for (name, value) in &self.headers {
            insert(name, value)?;
        }
        if self.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(SignedRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        })
    }
}

/// The message whose SHA-256 is signed for `X-Yoti-Auth-Digest`.
pub fn digest_message(method: &Method, path_and_query: &str, body: Option<&[u8]>) -> String {
    match body {
        Some(body) => format!("{method}&{path_and_query}&{}", encode_standard(body)),
        None => format!("{method}&{path_and_query}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yoti_crypto::testing::test_key;

    fn base() -> Url {
        Url::parse("https://api.yoti.com/api/v1").unwrap()
    }

    #[test]
    fn params_are_sorted_and_nonce_timestamp_added() {
        let key = test_key();
        let request = SignedRequest::builder(&key, base())
            .endpoint("/profile/abc")
            .param("appId", "sdk-id")
            .nonce("fixed-nonce")
            .timestamp_ms(1_500_000_000_000)
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.yoti.com/api/v1/profile/abc?appId=sdk-id&nonce=fixed-nonce&timestamp=1500000000000"
        );
        assert_eq!(request.method(), &Method::GET);
        assert!(request.body().is_none());
    }

    #[test]
    fn generated_nonce_is_uuid() {
        let key = test_key();
        let request = SignedRequest::builder(&key, base())
            .endpoint("/profile/abc")
            .build()
            .unwrap();
        let nonce = request
            .url()
            .query_pairs()
            .find(|(k, _)| k == "nonce")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(Uuid::parse_str(&nonce).is_ok());
    }

    #[test]
    fn sdk_headers_present() {
        let key = test_key();
        let request = SignedRequest::builder(&key, base())
            .endpoint("/profile/abc")
            .header(AUTH_KEY_HEADER, "public-key")
            .build()
            .unwrap();
        let headers = request.headers();
        assert_eq!(headers[SDK_HEADER], "Rust");
        assert!(headers[SDK_VERSION_HEADER].to_str().unwrap().starts_with("Rust-"));
        assert_eq!(headers[AUTH_KEY_HEADER], "public-key");
        assert!(headers.contains_key(AUTH_DIGEST_HEADER));
    }

    #[test]
    fn digest_message_includes_body() {
        assert_eq!(
            digest_message(&Method::GET, "/profile/abc?nonce=n", None),
            "GET&/profile/abc?nonce=n"
        );
        assert_eq!(
            digest_message(&Method::POST, "/sessions?nonce=n", Some(b"{}")),
            "POST&/sessions?nonce=n&e30="
        );
    }

    #[test]
    fn body_sets_content_type() {
        let key = test_key();
        let request = SignedRequest::builder(&key, base())
            .method(Method::POST)
            .endpoint("/sessions")
            .body(b"{}".to_vec())
            .build()
            .unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(request.body(), Some(&b"{}"[..]));
    }

    #[test]
    fn endpoint_must_be_absolute() {
        let key = test_key();
        let err = SignedRequest::builder(&key, base())
            .endpoint("profile/abc")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest { .. }));
    }
}
