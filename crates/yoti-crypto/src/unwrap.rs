//! # RSA Unwrap
//!
//! Both the receipt key and the one-time-use token are encrypted to the
//! application's public key with RSA PKCS#1 v1.5. They differ only in
//! their base64 alphabet and in what the plaintext is.

use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};
use zeroize::Zeroizing;

use yoti_core::CryptoError;

use crate::encoding::{decode_standard, decode_url_safe};

/// Unwrap the symmetric receipt key from `wrapped_receipt_key`.
///
/// The input is standard base64. The returned key is zeroed on drop.
pub fn unwrap_key(wrapped_key: &str, key: &RsaPrivateKey) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let wrapped = decode_standard("wrapped_receipt_key", wrapped_key)?;
    if wrapped.is_empty() {
        return Err(CryptoError::RsaDecrypt {
            field: "wrapped_receipt_key",
            reason: "wrapped key is empty".into(),
        });
    }
    key.decrypt(Pkcs1v15Encrypt, &wrapped)
        .map(Zeroizing::new)
        .map_err(|e| CryptoError::RsaDecrypt {
            field: "wrapped_receipt_key",
            reason: e.to_string(),
        })
}

/// Decrypt a one-time-use token into the receipt lookup token.
///
/// The input is URL-safe base64; padding is optional.
pub fn decrypt_token(encrypted_token: &str, key: &RsaPrivateKey) -> Result<String, CryptoError> {
    let encrypted = decode_url_safe("token", encrypted_token)?;
    let plain = key
        .decrypt(Pkcs1v15Encrypt, &encrypted)
        .map_err(|e| CryptoError::RsaDecrypt {
            field: "token",
            reason: e.to_string(),
        })?;
    String::from_utf8(plain).map_err(|e| CryptoError::RsaDecrypt {
        field: "token",
        reason: format!("decrypted token is not UTF-8: {e}"),
    })
}
