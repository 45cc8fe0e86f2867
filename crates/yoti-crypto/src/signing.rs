//! # Request Digest Signing
//!
//! Every API request carries `X-Yoti-Auth-Digest`: the base64 RSA
//! PKCS#1 v1.5 signature over the SHA-256 of the request message
//! (`METHOD&/path?query[&base64(body)]`).

use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

use yoti_core::CryptoError;

use crate::encoding::encode_standard;

/// Sign `message` and return the base64 signature.
pub fn sign_digest(message: &[u8], key: &RsaPrivateKey) -> Result<String, CryptoError> {
    let hashed = Sha256::digest(message);
    let signature = key
        .sign(Pkcs1v15Sign::new::<Sha256>(), &hashed)
        .map_err(|e| CryptoError::Signing(e.to_string()))?;
    Ok(encode_standard(&signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::decode_standard;
    use crate::testing::test_key;

    #[test]
    fn test_signature_verifies_with_public_key() {
        let key = test_key();
        let message = b"GET&/profile/abc?appId=sdk&nonce=n&timestamp=1";
        let signature = sign_digest(message, &key).unwrap();
        let raw = decode_standard("signature", &signature).unwrap();
        assert_eq!(raw.len(), 256);

        let hashed = Sha256::digest(message);
        key.to_public_key()
            .verify(Pkcs1v15Sign::new::<Sha256>(), &hashed, &raw)
            .expect("signature should verify");
    }

    #[test]
    fn test_signing_is_deterministic() {
        let key = test_key();
        assert_eq!(
            sign_digest(b"POST&/x", &key).unwrap(),
            sign_digest(b"POST&/x", &key).unwrap()
        );
    }

    #[test]
    fn test_tampered_message_fails_verification() {
        let key = test_key();
        let raw = decode_standard("signature", &sign_digest(b"GET&/a", &key).unwrap()).unwrap();
        let hashed = Sha256::digest(b"GET&/b");
        assert!(key
            .to_public_key()
            .verify(Pkcs1v15Sign::new::<Sha256>(), &hashed, &raw)
            .is_err());
    }
}
