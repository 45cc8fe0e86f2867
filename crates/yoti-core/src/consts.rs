//! # Platform Constants
//!
//! Attribute names, anchor extension OIDs and wire formats defined by the
//! platform. These must match the remote API exactly.

/// OID of the certificate extension marking a SOURCE anchor.
pub const ANCHOR_SOURCE_OID: &str = "1.3.6.1.4.1.47127.1.1.1";

/// OID of the certificate extension marking a VERIFIER anchor.
pub const ANCHOR_VERIFIER_OID: &str = "1.3.6.1.4.1.47127.1.1.2";

/// `chrono` format of attribute dates (`YYYY-MM-DD`).
pub const ATTRIBUTE_DATE_FORMAT: &str = "%Y-%m-%d";

/// `chrono` format the platform uses for issuance expiry timestamps.
pub const ISSUANCE_EXPIRY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Receipt `sharing_outcome` value for a completed share.
pub const SHARING_OUTCOME_SUCCESS: &str = "SUCCESS";

// -- User profile attribute names ---------------------------------------------

pub const ATTR_SELFIE: &str = "selfie";
pub const ATTR_GIVEN_NAMES: &str = "given_names";
pub const ATTR_FAMILY_NAME: &str = "family_name";
pub const ATTR_FULL_NAME: &str = "full_name";
pub const ATTR_MOBILE_NUMBER: &str = "phone_number";
pub const ATTR_EMAIL_ADDRESS: &str = "email_address";
pub const ATTR_DATE_OF_BIRTH: &str = "date_of_birth";
pub const ATTR_ESTIMATED_AGE: &str = "estimated_age";
pub const ATTR_ADDRESS: &str = "postal_address";
pub const ATTR_STRUCTURED_POSTAL_ADDRESS: &str = "structured_postal_address";
pub const ATTR_GENDER: &str = "gender";
pub const ATTR_NATIONALITY: &str = "nationality";
pub const ATTR_DOCUMENT_DETAILS: &str = "document_details";
pub const ATTR_DOCUMENT_IMAGES: &str = "document_images";
pub const ATTR_IDENTITY_PROFILE_REPORT: &str = "identity_profile_report";

/// Name prefix of an "age over" verification, e.g. `age_over:18`.
pub const ATTR_AGE_OVER: &str = "age_over";

/// Name prefix of an "age under" verification, e.g. `age_under:21`.
pub const ATTR_AGE_UNDER: &str = "age_under";

/// Key inside `structured_postal_address` used to derive `postal_address`.
pub const FORMATTED_ADDRESS_KEY: &str = "formatted_address";

// -- Application profile attribute names --------------------------------------

pub const ATTR_APPLICATION_NAME: &str = "application_name";
pub const ATTR_APPLICATION_URL: &str = "application_url";
pub const ATTR_APPLICATION_LOGO: &str = "application_logo";
pub const ATTR_APPLICATION_RECEIPT_BG_COLOR: &str = "application_receipt_bgcolor";
