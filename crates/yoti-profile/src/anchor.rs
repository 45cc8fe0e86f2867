//! # Anchors
//!
//! An anchor records where an attribute value came from (a SOURCE, such as
//! `PASSPORT`) or who checked it (a VERIFIER, such as `YOTI_ADMIN`). The
//! type and value are not carried as plain fields: they live in a private
//! X.509 extension of one of the anchor's origin-server certificates.
//!
//! ## Resolution
//!
//! 1. Every certificate is decoded as DER. A certificate that fails to
//!    decode is dropped from the anchor and logged at `debug`.
//! 2. Extensions are scanned in order across all decoded certificates. The
//!    first extension with the SOURCE or VERIFIER OID whose payload decodes
//!    as `SEQUENCE { [0] IMPLICIT UTF8String }` with non-empty text fixes
//!    the anchor's type and value.
//! 3. With no such extension the anchor is [`AnchorType::Unknown`] with an
//!    empty value.
//!
//! The signed timestamp is decoded independently; undecodable bytes leave
//! it absent.

use chrono::{DateTime, Utc};
use der::asn1::ObjectIdentifier;
use der::{Decode, Sequence};
use x509_cert::ext::Extension;
use x509_cert::Certificate;

use yoti_core::consts::{ANCHOR_SOURCE_OID, ANCHOR_VERIFIER_OID};
use yoti_core::proto;
use yoti_core::temporal::from_epoch_micros;
use yoti_core::RawAnchor;

const SOURCE_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap(ANCHOR_SOURCE_OID);
const VERIFIER_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap(ANCHOR_VERIFIER_OID);

/// Kind of provenance an anchor records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorType {
    Source,
    Verifier,
    Unknown,
}

impl AnchorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorType::Source => "SOURCE",
            AnchorType::Verifier => "VERIFIER",
            AnchorType::Unknown => "UNKNOWN",
        }
    }

    fn from_oid(oid: &ObjectIdentifier) -> Option<Self> {
        if *oid == SOURCE_OID {
            Some(AnchorType::Source)
        } else if *oid == VERIFIER_OID {
            Some(AnchorType::Verifier)
        } else {
            None
        }
    }
}

impl std::fmt::Display for AnchorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timestamp attached to an anchor by the platform's signing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedTimestamp {
    pub version: i32,
    pub timestamp: DateTime<Utc>,
}

/// A parsed anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    anchor_type: AnchorType,
    value: String,
    sub_type: String,
    origin_server_certs: Vec<Certificate>,
    signed_timestamp: Option<SignedTimestamp>,
}

impl Anchor {
    pub fn anchor_type(&self) -> AnchorType {
        self.anchor_type
    }

    /// Provenance label, e.g. `PASSPORT`; empty for unknown anchors.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    /// Certificates that decoded successfully, in wire order.
    pub fn origin_server_certs(&self) -> &[Certificate] {
        &self.origin_server_certs
    }

    pub fn signed_timestamp(&self) -> Option<&SignedTimestamp> {
        self.signed_timestamp.as_ref()
    }
}

/// Payload of the anchor extension.
#[derive(Sequence)]
struct AnchorExtension {
    #[asn1(context_specific = "0", tag_mode = "IMPLICIT")]
    value: String,
}

/// Parse every raw anchor. Never fails.
pub fn parse_anchors(raw: &[RawAnchor]) -> Vec<Anchor> {
    raw.iter().map(parse_anchor).collect()
}

fn parse_anchor(raw: &RawAnchor) -> Anchor {
    let origin_server_certs: Vec<Certificate> = raw
        .origin_server_certs
        .iter()
        .enumerate()
        .filter_map(|(index, der)| match Certificate::from_der(der) {
            Ok(cert) => Some(cert),
            Err(e) => {
                tracing::debug!(index, error = %e, "skipping undecodable anchor certificate");
                None
            }
        })
        .collect();

    let (anchor_type, value) =
        resolve_type(&origin_server_certs).unwrap_or((AnchorType::Unknown, String::new()));

    Anchor {
        anchor_type,
        value,
        sub_type: raw.sub_type.clone(),
        origin_server_certs,
        signed_timestamp: parse_signed_timestamp(&raw.signed_time_stamp),
    }
}

fn resolve_type(certs: &[Certificate]) -> Option<(AnchorType, String)> {
    first_anchor_extension(
        certs
            .iter()
            .flat_map(|cert| cert.tbs_certificate.extensions.iter().flatten()),
    )
}

/// Type and value of the first usable anchor extension. A matching OID with
/// a malformed or empty payload does not end the scan.
fn first_anchor_extension<'a>(extensions: impl IntoIterator<Item = &'a Extension>) -> Option<(AnchorType, String)> {
    extensions.into_iter().find_map(|ext| {
        let anchor_type = AnchorType::from_oid(&ext.extn_id)?;
        match AnchorExtension::from_der(ext.extn_value.as_bytes()) {
            Ok(decoded) if !decoded.value.is_empty() => Some((anchor_type, decoded.value)),
            Ok(_) => {
                tracing::debug!(oid = %ext.extn_id, "skipping empty anchor extension");
                None
            }
            Err(e) => {
                tracing::debug!(oid = %ext.extn_id, error = %e, "skipping malformed anchor extension");
                None
            }
        }
    })
}

fn parse_signed_timestamp(bytes: &[u8]) -> Option<SignedTimestamp> {
    if bytes.is_empty() {
        return None;
    }
    let decoded: proto::SignedTimestamp = proto::decode("SignedTimestamp", bytes).ok()?;
    Some(SignedTimestamp {
        version: decoded.version,
        timestamp: from_epoch_micros(decoded.timestamp)?,
    })
}

/// Anchors of the given type, in order.
pub(crate) fn filter_by_type(anchors: &[Anchor], anchor_type: AnchorType) -> Vec<&Anchor> {
    anchors
        .iter()
        .filter(|a| a.anchor_type == anchor_type)
        .collect()
}
