//! # Error Types -- Structured Error Hierarchy
//!
//! Defines the error types shared across the Yoti SDK. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Cryptographic errors are fatal to the content stream they occur in
//!   and are never retried.
//! - Wire errors name the protobuf message that failed to decode.
//! - Parse errors carry the offending input so a bad date or integer can be
//!   diagnosed from the message alone. They are scoped to a single attribute.

use thiserror::Error;

/// Failure to interpret an attribute value or derived field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Value was not a `YYYY-MM-DD` date.
    #[error("unable to parse date value {value:?}: {reason}")]
    Date {
        /// The offending input.
        value: String,
        /// Underlying parser message.
        reason: String,
    },

    /// Value was not a base-10 integer.
    #[error("unable to parse int value {value:?}: {reason}")]
    Int {
        /// The offending input.
        value: String,
        /// Underlying parser message.
        reason: String,
    },

    /// Value was not a JSON object.
    #[error("unable to parse JSON value: {0}")]
    Json(String),

    /// Value bytes were not valid UTF-8 where text was required.
    #[error("value is not valid UTF-8: {0}")]
    Utf8(String),

    /// A nested protobuf message inside the value failed to decode.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Attribute had a content type that the requested accessor cannot use.
    #[error("attribute {name:?} has content type {actual}, expected {expected}")]
    UnexpectedContentType {
        /// Attribute name.
        name: String,
        /// Content type the accessor requires.
        expected: &'static str,
        /// Content type found on the wire.
        actual: &'static str,
    },

    /// Age verification attribute name was not `<check_type>:<age>`.
    #[error("invalid age verification attribute {name:?}: {reason}")]
    AgeVerification {
        /// Attribute name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// `document_details` value did not match the expected layout.
    #[error("document details data is invalid: {0:?}")]
    DocumentDetails(String),

    /// Issuance token was missing from a third-party attribute.
    #[error("issuance token is invalid: token is empty")]
    EmptyIssuanceToken,

    /// Issuance expiry was present but not RFC 3339.
    #[error("unable to parse expiry date {value:?}: {reason}")]
    Expiry {
        /// The offending input.
        value: String,
        /// Underlying parser message.
        reason: String,
    },

    /// Receipt-level timestamp was not RFC 3339.
    #[error("unable to parse receipt timestamp {value:?}: {reason}")]
    Timestamp {
        /// The offending input.
        value: String,
        /// Underlying parser message.
        reason: String,
    },
}

/// Failure to decode a protobuf message from the wire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unable to decode {message}: {reason}")]
pub struct WireError {
    /// Name of the protobuf message being decoded.
    pub message: &'static str,
    /// Underlying `prost` decode error text.
    pub reason: String,
}

impl WireError {
    /// Wrap a `prost` decode error for the named message.
    pub fn decode(message: &'static str, err: prost::DecodeError) -> Self {
        Self {
            message,
            reason: err.to_string(),
        }
    }
}

/// Error in cryptographic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Base64 input could not be decoded.
    #[error("base64 decode failed for {field}: {reason}")]
    Base64 {
        /// What was being decoded.
        field: &'static str,
        /// Underlying decoder message.
        reason: String,
    },

    /// RSA private key could not be loaded.
    #[error("key error: {0}")]
    KeyError(String),

    /// RSA decryption of a wrapped key or token failed.
    #[error("RSA decryption of {field} failed: {reason}")]
    RsaDecrypt {
        /// What was being decrypted.
        field: &'static str,
        /// Underlying failure.
        reason: String,
    },

    /// AES key or IV had an unusable length.
    #[error("invalid AES parameters: {0}")]
    InvalidAesParameters(String),

    /// Cipher text was empty.
    #[error("cipher text is empty")]
    EmptyCipherText,

    /// AES decryption or PKCS#7 unpadding failed.
    #[error("AES decryption failed: {0}")]
    AesDecrypt(String),

    /// `EncryptedData` envelope could not be decoded.
    #[error(transparent)]
    Envelope(#[from] WireError),

    /// Request digest signing failed.
    #[error("signing failed: {0}")]
    Signing(String),
}
