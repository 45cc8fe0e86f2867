//! # yoti-core -- Foundational Types for the Yoti SDK
//!
//! This crate is the leaf of the workspace. It owns everything that is fixed
//! by the remote platform rather than by this SDK:
//!
//! 1. **Protobuf wire schemas.** `AttributeList`, `Attribute`, `Anchor`,
//!    `MultiValue`, `EncryptedData`, `SignedTimestamp`, `ExtraData`,
//!    `ThirdPartyAttribute` and friends, declared with `prost` derives. Field
//!    numbers match the platform's published `.proto` files exactly.
//!
//! 2. **Fixed constants.** Anchor extension OIDs, well-known attribute names,
//!    and the date formats used on the wire.
//!
//! 3. **Error hierarchy.** `ParseError`, `WireError` and `CryptoError`, shared
//!    by every other crate in the workspace.
//!
//! 4. **Temporal helpers.** Attribute dates, issuance expiry timestamps and
//!    signed-timestamp microseconds, parsed without silent defaults.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `yoti-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod consts;
pub mod error;
pub mod proto;
pub mod temporal;

pub use error::{CryptoError, ParseError, WireError};
pub use proto::ContentType;

/// Wire-level attribute, as decoded from an `AttributeList`.
pub type RawAttribute = proto::Attribute;

/// Wire-level anchor, as attached to a [`RawAttribute`].
pub type RawAnchor = proto::Anchor;
