//! Base64 engines used on the wire.
//!
//! Receipt fields and signatures use the standard alphabet with padding.
//! One-time-use tokens use the URL-safe alphabet; padding is accepted but
//! not required.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use yoti_core::CryptoError;

/// URL-safe alphabet, padding optional on decode.
pub const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode standard base64, naming the field on failure.
pub fn decode_standard(field: &'static str, input: &str) -> Result<Vec<u8>, CryptoError> {
    STANDARD.decode(input.trim()).map_err(|e| CryptoError::Base64 {
        field,
        reason: e.to_string(),
    })
}

/// Encode with the standard alphabet.
pub fn encode_standard(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode URL-safe base64, naming the field on failure.
pub fn decode_url_safe(field: &'static str, input: &str) -> Result<Vec<u8>, CryptoError> {
    URL_SAFE_LENIENT
        .decode(input.trim())
        .map_err(|e| CryptoError::Base64 {
            field,
            reason: e.to_string(),
        })
}
