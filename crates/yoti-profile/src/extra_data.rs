//! # Extra Data
//!
//! Non-profile data shared alongside a receipt, decoded from the share
//! `ExtraData` schema. Only `THIRD_PARTY_ATTRIBUTE` entries are read; other
//! entry types are ignored.

use yoti_core::proto::{self, DataEntryType};
use yoti_core::ParseError;

use crate::issuance::IssuanceDetails;

/// Decoded extra data of a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraData {
    attribute_issuance_details: Option<IssuanceDetails>,
}

impl ExtraData {
    /// Decode an `ExtraData` message. Empty input yields empty extra data.
    ///
    /// The first `THIRD_PARTY_ATTRIBUTE` entry is parsed; a failure there
    /// fails the whole call.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let message: proto::ExtraData = proto::decode("ExtraData", bytes)?;
        let attribute_issuance_details = message
            .list
            .iter()
            .find(|entry| entry.r#type() == DataEntryType::ThirdPartyAttribute)
            .map(|entry| IssuanceDetails::parse(&entry.value))
            .transpose()?;
        Ok(Self {
            attribute_issuance_details,
        })
    }

    /// Third-party attribute issuance details, if the share carried any.
    pub fn attribute_issuance_details(&self) -> Option<&IssuanceDetails> {
        self.attribute_issuance_details.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use yoti_core::proto::{DataEntry, ThirdPartyAttribute};

    fn entry(kind: DataEntryType, value: Vec<u8>) -> DataEntry {
        DataEntry {
            r#type: kind as i32,
            value,
        }
    }

    fn third_party(token: &[u8]) -> Vec<u8> {
        ThirdPartyAttribute {
            issuance_token: token.to_vec(),
            issuing_attributes: None,
        }
        .encode_to_vec()
    }

    fn encode(list: Vec<DataEntry>) -> Vec<u8> {
        proto::ExtraData { version: 1, list }.encode_to_vec()
    }

    #[test]
    fn test_empty_bytes() {
        assert_eq!(ExtraData::parse(&[]).unwrap(), ExtraData::default());
    }

    #[test]
    fn test_first_third_party_entry_wins() {
        let bytes = encode(vec![
            entry(DataEntryType::Invoice, b"ignored".to_vec()),
            entry(DataEntryType::ThirdPartyAttribute, third_party(b"first")),
            entry(DataEntryType::ThirdPartyAttribute, third_party(b"second")),
        ]);
        let extra = ExtraData::parse(&bytes).unwrap();
        assert_eq!(extra.attribute_issuance_details().unwrap().token(), "Zmlyc3Q=");
    }

    #[test]
    fn test_no_third_party_entry() {
        let bytes = encode(vec![entry(DataEntryType::Location, vec![1, 2, 3])]);
        assert!(ExtraData::parse(&bytes).unwrap().attribute_issuance_details().is_none());
    }

    #[test]
    fn test_bad_issuance_fails() {
        let bytes = encode(vec![entry(DataEntryType::ThirdPartyAttribute, third_party(b""))]);
        assert_eq!(ExtraData::parse(&bytes), Err(ParseError::EmptyIssuanceToken));
    }
}
