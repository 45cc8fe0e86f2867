//! # Protobuf Wire Schemas
//!
//! Hand-declared `prost` messages mirroring the platform's published
//! schemas. Only the fields this SDK reads are declared; unknown fields are
//! skipped by the decoder, so newer payloads keep decoding.
//!
//! | Module | Platform package |
//! |--------|------------------|
//! | [`attribute`] | `attrpubapi_v3` |
//! | [`common`] | `compubapi_v3` |
//! | [`share`] | `sharepubapi_v1` |

pub mod attribute;
pub mod common;
pub mod share;

pub use attribute::{multi_value, Anchor, Attribute, AttributeList, ContentType, MultiValue};
pub use common::{EncryptedData, SignedTimestamp};
pub use share::{DataEntry, DataEntryType, Definition, ExtraData, IssuingAttributes, ThirdPartyAttribute};

use crate::error::WireError;

/// Decode a protobuf message, naming it in the error on failure.
pub fn decode<M: prost::Message + Default>(message: &'static str, bytes: &[u8]) -> Result<M, WireError> {
    M::decode(bytes).map_err(|e| WireError::decode(message, e))
}
