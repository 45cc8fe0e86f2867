//! # AES-CBC Decryption
//!
//! Content streams are AES-CBC encrypted with PKCS#7 padding. The key size
//! follows the unwrapped key length (16, 24 or 32 bytes); the platform uses
//! 32 in practice.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, KeyIvInit};

use yoti_core::CryptoError;

/// AES block size in bytes; also the IV length.
pub const BLOCK_SIZE: usize = 16;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt `cipher_text` with AES-CBC and strip PKCS#7 padding.
///
/// # Errors
///
/// - [`CryptoError::EmptyCipherText`] for empty input, so an empty payload
///   can never masquerade as an empty attribute list.
/// - [`CryptoError::InvalidAesParameters`] for an unsupported key size, an
///   IV that is not one block, or input that is not whole blocks.
/// - [`CryptoError::AesDecrypt`] when the padding is invalid, which is what
///   a wrong key usually looks like.
pub fn decipher_aes(key: &[u8], iv: &[u8], cipher_text: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if cipher_text.is_empty() {
        return Err(CryptoError::EmptyCipherText);
    }
    if iv.len() != BLOCK_SIZE {
        return Err(CryptoError::InvalidAesParameters(format!(
            "IV must be {BLOCK_SIZE} bytes, got {}",
            iv.len()
        )));
    }
    if cipher_text.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidAesParameters(format!(
            "cipher text length {} is not a multiple of the block size",
            cipher_text.len()
        )));
    }

    let result = match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(invalid_length)?
            .decrypt_padded_vec_mut::<Pkcs7>(cipher_text),
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(invalid_length)?
            .decrypt_padded_vec_mut::<Pkcs7>(cipher_text),
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(invalid_length)?
            .decrypt_padded_vec_mut::<Pkcs7>(cipher_text),
        n => {
            return Err(CryptoError::InvalidAesParameters(format!(
                "key must be 16, 24 or 32 bytes, got {n}"
            )))
        }
    };

    result.map_err(|e| CryptoError::AesDecrypt(format!("invalid padding: {e}")))
}

fn invalid_length(e: aes::cipher::InvalidLength) -> CryptoError {
    CryptoError::InvalidAesParameters(e.to_string())
}
