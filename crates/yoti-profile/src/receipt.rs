//! # Receipt Decoding
//!
//! `GET /profile/{token}` returns a JSON receipt whose content fields are
//! base64 `EncryptedData` envelopes, all encrypted under one AES key that
//! is itself RSA-wrapped for the application.
//!
//! ## Flow
//!
//! 1. The sharing outcome must be `SUCCESS`.
//! 2. The wrapped receipt key is unwrapped. Nothing can be read without it,
//!    so a failure here ends the call.
//! 3. The user profile, application profile, extra data and timestamp are
//!    each parsed on their own. A failing stream is logged, recorded in a
//!    [`MultiError`], and left at its default.
//! 4. With any stream failures the call returns
//!    [`ReceiptError::Content`], which still carries the partial details.
//!
//! Absent or empty content fields are not failures: the platform omits
//! them when nothing was shared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use yoti_core::consts::SHARING_OUTCOME_SUCCESS;
use yoti_core::temporal::parse_receipt_timestamp;
use yoti_crypto::encoding::decode_standard;
use yoti_crypto::{decrypt_envelope, unwrap_key, RsaPrivateKey};

use crate::error::{ContentStream, MultiError, ProfileError, ReceiptError};
use crate::extra_data::ExtraData;
use crate::profile::{ApplicationProfile, AttributeCollection, UserProfile};

/// Receipt as returned by the profile endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Receipt {
    pub receipt_id: Option<String>,
    pub other_party_profile_content: Option<String>,
    pub profile_content: Option<String>,
    pub extra_data_content: Option<String>,
    /// Not decoded; the application's own extra data is not part of the
    /// shared profile.
    pub other_party_extra_data_content: Option<String>,
    pub wrapped_receipt_key: Option<String>,
    pub policy_uri: Option<String>,
    pub personal_key: Option<String>,
    pub remember_me_id: Option<String>,
    pub parent_remember_me_id: Option<String>,
    pub sharing_outcome: Option<String>,
    pub timestamp: Option<String>,
}

/// Response body of `GET /profile/{token}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub receipt: Receipt,
}

/// Everything decoded from one receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityDetails {
    user_profile: UserProfile,
    application_profile: ApplicationProfile,
    extra_data: ExtraData,
    remember_me_id: Option<String>,
    parent_remember_me_id: Option<String>,
    timestamp: Option<DateTime<Utc>>,
    receipt_id: String,
}

impl ActivityDetails {
    /// Decrypt and decode `receipt` with the application's private key.
    pub fn from_receipt(receipt: &Receipt, key: &RsaPrivateKey) -> Result<Self, ReceiptError> {
        let outcome = receipt.sharing_outcome.as_deref().unwrap_or_default();
        if outcome != SHARING_OUTCOME_SUCCESS {
            return Err(ReceiptError::SharingFailure {
                outcome: outcome.to_string(),
            });
        }

        let receipt_key = unwrap_key(
            receipt.wrapped_receipt_key.as_deref().unwrap_or_default(),
            key,
        )
        .map_err(ReceiptError::KeyUnwrap)?;

        let mut errors = MultiError::new();
        let mut details = ActivityDetails {
            remember_me_id: receipt.remember_me_id.clone(),
            parent_remember_me_id: receipt.parent_remember_me_id.clone(),
            receipt_id: receipt.receipt_id.clone().unwrap_or_default(),
            ..Default::default()
        };

        match decode_attributes(ContentStream::UserProfile, &receipt.other_party_profile_content, &receipt_key) {
            Ok(attributes) => details.user_profile = UserProfile::new(attributes),
            Err(e) => record(&mut errors, ContentStream::UserProfile, e),
        }

        match decode_attributes(ContentStream::ApplicationProfile, &receipt.profile_content, &receipt_key) {
            Ok(attributes) => details.application_profile = ApplicationProfile::new(attributes),
            Err(e) => record(&mut errors, ContentStream::ApplicationProfile, e),
        }

        let extra_data = decrypt_content(ContentStream::ExtraData, &receipt.extra_data_content, &receipt_key)
            .and_then(|plain| Ok(ExtraData::parse(&plain)?));
        match extra_data {
            Ok(extra_data) => details.extra_data = extra_data,
            Err(e) => record(&mut errors, ContentStream::ExtraData, e),
        }

        if let Some(timestamp) = receipt.timestamp.as_deref().filter(|t| !t.is_empty()) {
            match parse_receipt_timestamp(timestamp) {
                Ok(parsed) => details.timestamp = Some(parsed),
                Err(e) => record(&mut errors, ContentStream::Timestamp, e.into()),
            }
        }

        if errors.is_empty() {
            Ok(details)
        } else {
            Err(ReceiptError::Content {
                partial: Box::new(details),
                errors,
            })
        }
    }

    /// Attributes shared by the user.
    pub fn user_profile(&self) -> &UserProfile {
        &self.user_profile
    }

    /// Attributes of the relying application.
    pub fn application_profile(&self) -> &ApplicationProfile {
        &self.application_profile
    }

    pub fn extra_data(&self) -> &ExtraData {
        &self.extra_data
    }

    /// Identifier of the user, stable for this application.
    pub fn remember_me_id(&self) -> Option<&str> {
        self.remember_me_id.as_deref()
    }

    /// Identifier of the user, stable across an organisation's applications.
    pub fn parent_remember_me_id(&self) -> Option<&str> {
        self.parent_remember_me_id.as_deref()
    }

    pub fn timestamp(&self) -> Option<&DateTime<Utc>> {
        self.timestamp.as_ref()
    }

    pub fn receipt_id(&self) -> &str {
        &self.receipt_id
    }
}

fn record(errors: &mut MultiError, stream: ContentStream, error: ProfileError) {
    tracing::warn!(%stream, error = %error, "failed to parse receipt content");
    errors.push(stream, error);
}

/// Base64-decode and decrypt one content field. Absent or empty content
/// decrypts to nothing.
fn decrypt_content(
    stream: ContentStream,
    content: &Option<String>,
    receipt_key: &[u8],
) -> Result<Vec<u8>, ProfileError> {
    let Some(content) = content.as_deref().filter(|c| !c.is_empty()) else {
        return Ok(Vec::new());
    };
    let envelope = decode_standard(stream.field_name(), content)?;
    Ok(decrypt_envelope(&envelope, receipt_key)?)
}

fn decode_attributes(
    stream: ContentStream,
    content: &Option<String>,
    receipt_key: &[u8],
) -> Result<AttributeCollection, ProfileError> {
    let plain = decrypt_content(stream, content, receipt_key)?;
    Ok(AttributeCollection::decode(&plain)?)
}
