//! # EncryptedData Envelope
//!
//! Every content stream of a receipt (user profile, application profile,
//! extra data) is a protobuf `EncryptedData { iv, cipher_text }` encrypted
//! under the unwrapped receipt key.

use yoti_core::proto::{self, EncryptedData};
use yoti_core::CryptoError;

use crate::symmetric::decipher_aes;

/// Decode an `EncryptedData` envelope and decrypt its payload.
///
/// An envelope with empty `cipher_text` is an error, not an empty payload.
pub fn decrypt_envelope(envelope: &[u8], key: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let data: EncryptedData = proto::decode("EncryptedData", envelope)?;
    if data.cipher_text.is_empty() {
        return Err(CryptoError::EmptyCipherText);
    }
    decipher_aes(key, &data.iv, &data.cipher_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::encrypt_envelope;
    use prost::Message;

    const KEY: [u8; 32] = [0x5a; 32];

    #[test]
    fn test_envelope_round_trip() {
        let envelope = encrypt_envelope(&KEY, b"\x0a\x03abc");
        assert_eq!(decrypt_envelope(&envelope, &KEY).unwrap(), b"\x0a\x03abc");
    }

    #[test]
    fn test_empty_cipher_text_is_error() {
        let envelope = EncryptedData {
            iv: vec![0u8; 16],
            cipher_text: vec![],
        }
        .encode_to_vec();
        assert_eq!(decrypt_envelope(&envelope, &KEY), Err(CryptoError::EmptyCipherText));
    }

    #[test]
    fn test_empty_envelope_is_error() {
        assert_eq!(decrypt_envelope(&[], &KEY), Err(CryptoError::EmptyCipherText));
    }

    #[test]
    fn test_malformed_envelope_is_wire_error() {
        let err = decrypt_envelope(&[0x0a, 0xff, 0x01], &KEY).unwrap_err();
        assert!(matches!(err, CryptoError::Envelope(ref w) if w.message == "EncryptedData"));
    }
}
