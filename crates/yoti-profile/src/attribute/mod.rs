//! # Typed Attributes
//!
//! A [`RawAttribute`] is turned into an [`Attribute<T>`] on demand: the name,
//! content type and ephemeral id are copied, the value is parsed into `T`,
//! and the anchors are parsed from their certificates.
//!
//! `T` is any [`TypedValue`]. The generic [`AttributeValue`] follows the
//! content-type tag; the concrete types (`String`, `NaiveDate`, `Image`,
//! ...) let an accessor ask for the shape it expects.
//!
//! Parsing one attribute never affects another. A bad date in
//! `date_of_birth` fails only the call that asked for it.

pub mod age;
pub mod document_details;
pub mod image;
pub mod multi_value;
pub mod value;

use chrono::NaiveDate;

use yoti_core::{ContentType, ParseError, RawAttribute};

use crate::anchor::{self, Anchor, AnchorType};

pub use age::AgeVerification;
pub use document_details::DocumentDetails;
pub use image::{Image, ImageType};
pub use multi_value::{parse_multi_value, MultiValueItem};
pub use value::{parse_value, AttributeValue, JsonMap};

/// A parsed attribute with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute<T> {
    name: String,
    value: T,
    content_type: ContentType,
    anchors: Vec<Anchor>,
    ephemeral_id: String,
}

/// Value parsed according to the wire content type.
pub type GenericAttribute = Attribute<AttributeValue>;
pub type StringAttribute = Attribute<String>;
pub type DateAttribute = Attribute<NaiveDate>;
pub type IntAttribute = Attribute<i64>;
pub type ImageAttribute = Attribute<Image>;
pub type JsonAttribute = Attribute<JsonMap>;
pub type MultiValueAttribute = Attribute<Vec<MultiValueItem>>;
pub type ImageSliceAttribute = Attribute<Vec<Image>>;
pub type DocumentDetailsAttribute = Attribute<DocumentDetails>;

/// A value type an [`Attribute`] can be parsed into.
pub trait TypedValue: Sized {
    /// Parse the value of `raw`.
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError>;
}

impl<T: TypedValue> Attribute<T> {
    /// Parse `raw` into a typed attribute.
    pub fn from_raw(raw: &RawAttribute) -> Result<Self, ParseError> {
        let value = T::from_raw_value(raw)?;
        Ok(Self::with_value(raw, value))
    }
}

impl<T> Attribute<T> {
    /// Build an attribute from `raw` with an already-derived value.
    pub(crate) fn with_value(raw: &RawAttribute, value: T) -> Self {
        Self::derived(raw, &raw.name, raw.content_type(), value)
    }

    /// Build an attribute under another name, keeping `raw`'s anchors and
    /// ephemeral id.
    pub(crate) fn derived(raw: &RawAttribute, name: &str, content_type: ContentType, value: T) -> Self {
        Self {
            name: name.to_string(),
            value,
            content_type,
            anchors: anchor::parse_anchors(&raw.anchors),
            ephemeral_id: raw.ephemeral_id.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Content type declared on the wire.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// All anchors, in wire order.
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Anchors describing how the value was acquired.
    pub fn sources(&self) -> Vec<&Anchor> {
        anchor::filter_by_type(&self.anchors, AnchorType::Source)
    }

    /// Anchors describing how the value was verified.
    pub fn verifiers(&self) -> Vec<&Anchor> {
        anchor::filter_by_type(&self.anchors, AnchorType::Verifier)
    }

    /// Per-share identifier of this attribute; empty if not set.
    pub fn ephemeral_id(&self) -> &str {
        &self.ephemeral_id
    }
}

// ---------------------------------------------------------------------------
// TypedValue impls
// ---------------------------------------------------------------------------

impl TypedValue for AttributeValue {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        parse_value(raw.content_type(), &raw.value)
    }
}

impl TypedValue for String {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        value::utf8(&raw.value)
    }
}

impl TypedValue for NaiveDate {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        yoti_core::temporal::parse_attribute_date(&value::utf8(&raw.value)?)
    }
}

impl TypedValue for i64 {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        value::parse_int(&raw.value)
    }
}

impl TypedValue for JsonMap {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        value::parse_json(&raw.value)
    }
}

impl TypedValue for Image {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        let image_type = match raw.content_type() {
            ContentType::Jpeg => ImageType::Jpeg,
            ContentType::Png => ImageType::Png,
            other => return Err(unexpected(raw, "JPEG or PNG", other)),
        };
        Ok(Image::new(image_type, raw.value.clone()))
    }
}

impl TypedValue for Vec<MultiValueItem> {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        match raw.content_type() {
            ContentType::MultiValue => parse_multi_value(&raw.value),
            other => Err(unexpected(raw, "MULTI_VALUE", other)),
        }
    }
}

impl TypedValue for Vec<Image> {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        let items = Vec::<MultiValueItem>::from_raw_value(raw)?;
        multi_value::collect_images(&raw.name, &items)
    }
}

impl TypedValue for DocumentDetails {
    fn from_raw_value(raw: &RawAttribute) -> Result<Self, ParseError> {
        DocumentDetails::parse(&value::utf8(&raw.value)?)
    }
}

fn unexpected(raw: &RawAttribute, expected: &'static str, actual: ContentType) -> ParseError {
    ParseError::UnexpectedContentType {
        name: raw.name.clone(),
        expected,
        actual: actual.name(),
    }
}
