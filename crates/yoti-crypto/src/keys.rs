//! # RSA Key Loading
//!
//! The application key is downloaded from the platform dashboard as a PEM
//! file. Older downloads are PKCS#1 (`BEGIN RSA PRIVATE KEY`), newer ones
//! PKCS#8 (`BEGIN PRIVATE KEY`); both are accepted.
//!
//! The key never leaves this process. Only its public half is sent, as
//! base64 DER in the `X-Yoti-Auth-Key` header.

use std::path::Path;

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::{DecodePrivateKey, EncodePublicKey};
use rsa::RsaPrivateKey;

use yoti_core::CryptoError;

use crate::encoding::encode_standard;

/// Parse an RSA private key from PEM text.
pub fn load_private_key_pem(pem: &str) -> Result<RsaPrivateKey, CryptoError> {
    let pem = pem.trim();
    if pem.contains("BEGIN RSA PRIVATE KEY") {
        RsaPrivateKey::from_pkcs1_pem(pem)
            .map_err(|e| CryptoError::KeyError(format!("invalid PKCS#1 key: {e}")))
    } else {
        RsaPrivateKey::from_pkcs8_pem(pem)
            .map_err(|e| CryptoError::KeyError(format!("invalid PKCS#8 key: {e}")))
    }
}

/// Read and parse an RSA private key from a PEM file.
pub fn load_private_key_file(path: impl AsRef<Path>) -> Result<RsaPrivateKey, CryptoError> {
    let path = path.as_ref();
    let pem = std::fs::read_to_string(path)
        .map_err(|e| CryptoError::KeyError(format!("unable to read {}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "loading application private key");
    load_private_key_pem(&pem)
}

/// Base64 DER (`SubjectPublicKeyInfo`) encoding of the key's public half.
pub fn public_key_der_base64(key: &RsaPrivateKey) -> Result<String, CryptoError> {
    let der = key
        .to_public_key()
        .to_public_key_der()
        .map_err(|e| CryptoError::KeyError(format!("unable to encode public key: {e}")))?;
    Ok(encode_standard(der.as_bytes()))
}
