//! Encryption counterparts of the decrypt paths, for test fixtures.
//!
//! Compiled only for tests and under the `test-support` feature. These
//! functions panic on failure.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockEncryptMut, KeyIvInit};
use base64::Engine;
use prost::Message;
use rand::RngCore;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};

use yoti_core::proto::EncryptedData;

use crate::encoding::{encode_standard, URL_SAFE_LENIENT};

/// 2048-bit test key, PKCS#1 PEM.
pub const TEST_KEY_PEM: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/test_key.pem"));

/// The same key as [`TEST_KEY_PEM`], PKCS#8 PEM.
pub const TEST_KEY_PKCS8_PEM: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/test_key_pkcs8.pem"));

/// Parse [`TEST_KEY_PEM`].
pub fn test_key() -> RsaPrivateKey {
    crate::keys::load_private_key_pem(TEST_KEY_PEM).expect("test key fixture should parse")
}

/// RSA-encrypt a symmetric key and base64 it, as `wrapped_receipt_key`.
pub fn wrap_key(aes_key: &[u8], key: &RsaPrivateKey) -> String {
    let wrapped = key
        .to_public_key()
        .encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, aes_key)
        .expect("wrap key");
    encode_standard(&wrapped)
}

/// RSA-encrypt a receipt token and URL-safe base64 it.
pub fn encrypt_token(token: &str, key: &RsaPrivateKey) -> String {
    let encrypted = key
        .to_public_key()
        .encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, token.as_bytes())
        .expect("encrypt token");
    URL_SAFE_LENIENT.encode(encrypted)
}

/// AES-CBC encrypt with PKCS#7 padding.
pub fn encipher_aes(key: &[u8], iv: &[u8], plain: &[u8]) -> Vec<u8> {
    match key.len() {
        16 => cbc::Encryptor::<aes::Aes128>::new_from_slices(key, iv)
            .expect("key/iv")
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
        24 => cbc::Encryptor::<aes::Aes192>::new_from_slices(key, iv)
            .expect("key/iv")
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
        32 => cbc::Encryptor::<aes::Aes256>::new_from_slices(key, iv)
            .expect("key/iv")
            .encrypt_padded_vec_mut::<Pkcs7>(plain),
        n => panic!("unsupported AES key length {n}"),
    }
}

/// Encrypt `plain` under `key` with a random IV and wrap it in an
/// encoded `EncryptedData` envelope.
pub fn encrypt_envelope(key: &[u8], plain: &[u8]) -> Vec<u8> {
    let mut iv = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut iv);
    EncryptedData {
        iv: iv.to_vec(),
        cipher_text: encipher_aes(key, &iv, plain),
    }
    .encode_to_vec()
}
