//! # yoti-crypto -- Cryptographic Primitives
//!
//! Provides the cryptographic building blocks of the receipt pipeline:
//!
//! - **Key loading** of the application's RSA private key from PEM
//!   (PKCS#1 or PKCS#8).
//! - **Key unwrap**: RSA PKCS#1 v1.5 decryption of the base64 wrapped
//!   receipt key.
//! - **Token decryption**: RSA PKCS#1 v1.5 decryption of the URL-safe
//!   base64 one-time-use token handed to the application after a share.
//! - **AES-CBC** decryption with PKCS#7 unpadding, and decryption of the
//!   protobuf `EncryptedData` envelope that wraps every content stream.
//! - **Request signing**: RSA PKCS#1 v1.5 over SHA-256 for the
//!   `X-Yoti-Auth-Digest` header.
//!
//! ## Crate Policy
//!
//! - Depends only on `yoti-core` internally.
//! - Failures are returned as [`CryptoError`] and never retried.
//! - Unwrapped symmetric keys are held in `Zeroizing` buffers.

pub mod encoding;
pub mod envelope;
pub mod keys;
pub mod signing;
pub mod symmetric;
pub mod unwrap;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use envelope::decrypt_envelope;
pub use keys::{load_private_key_file, load_private_key_pem, public_key_der_base64};
pub use signing::sign_digest;
pub use symmetric::decipher_aes;
pub use unwrap::{decrypt_token, unwrap_key};
pub use yoti_core::CryptoError;

/// The application's RSA private key.
pub use rsa::RsaPrivateKey;
