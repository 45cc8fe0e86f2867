//! # yoti-profile -- Receipt Parsing
//!
//! Turns a decrypted receipt into typed, queryable profiles.
//!
//! ## Layers
//!
//! - [`attribute`]: content-type dispatch into the closed
//!   [`AttributeValue`] sum type, typed [`Attribute<T>`] wrappers, images,
//!   multi-value lists, document details and age verifications.
//! - [`anchor`]: provenance of an attribute, resolved from private X.509
//!   certificate extensions.
//! - [`profile`]: [`UserProfile`] and [`ApplicationProfile`], both built on
//!   one [`AttributeCollection`].
//! - [`extra_data`] and [`issuance`]: third-party attribute issuance
//!   details shared alongside the profile.
//! - [`receipt`]: the full receipt flow, producing [`ActivityDetails`] and
//!   collecting per-stream failures in a [`MultiError`].
//!
//! ## Example
//!
//! ```no_run
//! use yoti_profile::{ActivityDetails, ProfileResponse};
//!
//! # fn run(body: &str, key: &yoti_crypto::RsaPrivateKey) -> Result<(), Box<dyn std::error::Error>> {
//! let response: ProfileResponse = serde_json::from_str(body)?;
//! let details = ActivityDetails::from_receipt(&response.receipt, key)?;
//! if let Some(name) = details.user_profile().full_name()? {
//!     println!("{}", name.value());
//! }
//! # Ok(())
//! # }
//! ```

pub mod anchor;
pub mod attribute;
pub mod error;
pub mod extra_data;
pub mod issuance;
pub mod profile;
pub mod receipt;

pub use anchor::{Anchor, AnchorType, SignedTimestamp};
pub use attribute::{
    AgeVerification, Attribute, AttributeValue, DateAttribute, DocumentDetails,
    DocumentDetailsAttribute, GenericAttribute, Image, ImageAttribute, ImageSliceAttribute,
    ImageType, IntAttribute, JsonAttribute, JsonMap, MultiValueAttribute, MultiValueItem,
    StringAttribute, TypedValue,
};
pub use error::{ContentStream, MultiError, ProfileError, ReceiptError, StreamError};
pub use extra_data::ExtraData;
pub use issuance::{AttributeDefinition, IssuanceDetails};
pub use profile::{ApplicationProfile, AttributeCollection, EstimatedAge, UserProfile};
pub use receipt::{ActivityDetails, ProfileResponse, Receipt};
pub use yoti_core::ParseError;
