//! # Issuance Details
//!
//! A `ThirdPartyAttribute` entry in the extra data invites the relying party
//! to issue attributes back to the user. The issuance token is opaque
//! bytes on the wire and is exposed as standard base64.

use chrono::{DateTime, Utc};

use yoti_core::proto::{self, ThirdPartyAttribute};
use yoti_core::temporal::parse_expiry;
use yoti_core::ParseError;
use yoti_crypto::encoding::encode_standard;

/// Name of an attribute that may be issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefinition {
    pub name: String,
}

/// Parsed third-party attribute issuance details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceDetails {
    token: String,
    expiry: Option<DateTime<Utc>>,
    attributes: Vec<AttributeDefinition>,
}

impl IssuanceDetails {
    /// Decode a `ThirdPartyAttribute` message.
    ///
    /// # Errors
    ///
    /// Malformed protobuf, an empty issuance token, or a non-empty expiry
    /// that is not RFC 3339.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let message: ThirdPartyAttribute = proto::decode("ThirdPartyAttribute", bytes)?;
        if message.issuance_token.is_empty() {
            return Err(ParseError::EmptyIssuanceToken);
        }

        let (expiry, attributes) = match message.issuing_attributes {
            Some(issuing) => (
                parse_expiry(&issuing.expiry_date)?,
                issuing
                    .definitions
                    .into_iter()
                    .map(|d| AttributeDefinition { name: d.name })
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Ok(Self {
            token: encode_standard(&message.issuance_token),
            expiry,
            attributes,
        })
    }

    /// Issuance token, standard base64.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expiry(&self) -> Option<&DateTime<Utc>> {
        self.expiry.as_ref()
    }

    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use yoti_core::proto::{Definition, IssuingAttributes};
    use yoti_core::temporal::format_expiry;

    fn encode(token: &[u8], expiry: &str, names: &[&str]) -> Vec<u8> {
        ThirdPartyAttribute {
            issuance_token: token.to_vec(),
            issuing_attributes: Some(IssuingAttributes {
                expiry_date: expiry.into(),
                definitions: names.iter().map(|n| Definition { name: n.to_string() }).collect(),
            }),
        }
        .encode_to_vec()
    }

    #[test]
    fn test_parse_full() {
        let details =
            IssuanceDetails::parse(&encode(b"some-token", "2019-10-15T22:04:05.123Z", &["com.thirdparty.id"]))
                .unwrap();
        assert_eq!(details.token(), "c29tZS10b2tlbg==");
        assert_eq!(format_expiry(details.expiry().unwrap()), "2019-10-15T22:04:05.123Z");
        assert_eq!(details.attributes().len(), 1);
        assert_eq!(details.attributes()[0].name, "com.thirdparty.id");
    }

    #[test]
    fn test_empty_expiry_is_none() {
        let details = IssuanceDetails::parse(&encode(b"t", "", &[])).unwrap();
        assert!(details.expiry().is_none());
        assert!(details.attributes().is_empty());
    }

    #[test]
    fn test_missing_issuing_attributes() {
        let bytes = ThirdPartyAttribute {
            issuance_token: b"t".to_vec(),
            issuing_attributes: None,
        }
        .encode_to_vec();
        let details = IssuanceDetails::parse(&bytes).unwrap();
        assert!(details.expiry().is_none());
    }

    #[test]
    fn test_offset_expiry_is_converted_to_utc() {
        let details = IssuanceDetails::parse(&encode(b"t", "2019-10-15T23:04:05.000+01:00", &[])).unwrap();
        assert_eq!(format_expiry(details.expiry().unwrap()), "2019-10-15T22:04:05.000Z");
    }

    #[test]
    fn test_empty_token_is_error() {
        assert_eq!(
            IssuanceDetails::parse(&encode(b"", "", &[])),
            Err(ParseError::EmptyIssuanceToken)
        );
    }

    #[test]
    fn test_bad_expiry_is_error() {
        let err = IssuanceDetails::parse(&encode(b"t", "2019-10-15", &[])).unwrap_err();
        assert!(matches!(err, ParseError::Expiry { ref value, .. } if value == "2019-10-15"));
    }

    #[test]
    fn test_malformed_protobuf() {
        assert!(matches!(IssuanceDetails::parse(&[0xff]), Err(ParseError::Wire(_))));
    }
}
