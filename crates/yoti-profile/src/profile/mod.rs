//! # Profiles
//!
//! An [`AttributeCollection`] is the decoded `AttributeList` of one content
//! stream, kept raw and in wire order. Attributes are parsed only when an
//! accessor asks for them, so a malformed value fails the call that reads
//! it and nothing else.
//!
//! [`UserProfile`] and [`ApplicationProfile`] each wrap a collection and add
//! named accessors for the attributes the platform defines.
//!
//! Lookups by name return the first match. Duplicate names are legal; use
//! [`AttributeCollection::get_attributes`] to see all of them.

pub mod application;
pub mod user;

use yoti_core::proto::{self, AttributeList};
use yoti_core::{ParseError, RawAttribute};

use crate::attribute::{
    Attribute, DateAttribute, GenericAttribute, ImageAttribute, IntAttribute, JsonAttribute,
    MultiValueAttribute, StringAttribute, TypedValue,
};

pub use application::ApplicationProfile;
pub use user::{EstimatedAge, UserProfile};

/// Ordered attributes of one profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeCollection {
    attributes: Vec<RawAttribute>,
}

impl AttributeCollection {
    pub fn new(attributes: Vec<RawAttribute>) -> Self {
        Self { attributes }
    }

    /// Decode an `AttributeList`. Empty input is an empty collection.
    pub fn decode(bytes: &[u8]) -> Result<Self, ParseError> {
        let list: AttributeList = proto::decode("AttributeList", bytes)?;
        Ok(Self::new(list.attributes))
    }

    pub fn raw_attributes(&self) -> &[RawAttribute] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// First raw attribute named `name`.
    pub fn find(&self, name: &str) -> Option<&RawAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// First attribute named `name`, parsed by its content type.
    pub fn get_attribute(&self, name: &str) -> Result<Option<GenericAttribute>, ParseError> {
        self.get_typed(name)
    }

    /// Every attribute named `name`, in wire order.
    pub fn get_attributes(&self, name: &str) -> Result<Vec<GenericAttribute>, ParseError> {
        self.attributes
            .iter()
            .filter(|a| a.name == name)
            .map(GenericAttribute::from_raw)
            .collect()
    }

    /// The attribute with the given ephemeral id.
    pub fn get_attribute_by_id(&self, ephemeral_id: &str) -> Result<Option<GenericAttribute>, ParseError> {
        self.attributes
            .iter()
            .find(|a| a.ephemeral_id == ephemeral_id)
            .map(GenericAttribute::from_raw)
            .transpose()
    }

    pub fn get_string_attribute(&self, name: &str) -> Result<Option<StringAttribute>, ParseError> {
        self.get_typed(name)
    }

    pub fn get_date_attribute(&self, name: &str) -> Result<Option<DateAttribute>, ParseError> {
        self.get_typed(name)
    }

    pub fn get_int_attribute(&self, name: &str) -> Result<Option<IntAttribute>, ParseError> {
        self.get_typed(name)
    }

    pub fn get_image_attribute(&self, name: &str) -> Result<Option<ImageAttribute>, ParseError> {
        self.get_typed(name)
    }

    pub fn get_json_attribute(&self, name: &str) -> Result<Option<JsonAttribute>, ParseError> {
        self.get_typed(name)
    }

    pub fn get_multi_value_attribute(&self, name: &str) -> Result<Option<MultiValueAttribute>, ParseError> {
        self.get_typed(name)
    }

    /// First attribute named `name`, parsed as `T`.
    pub fn get_typed<T: TypedValue>(&self, name: &str) -> Result<Option<Attribute<T>>, ParseError> {
        self.find(name).map(Attribute::<T>::from_raw).transpose()
    }
}

impl FromIterator<RawAttribute> for AttributeCollection {
    fn from_iter<I: IntoIterator<Item = RawAttribute>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{raw, string};
    use super::*;
    use crate::attribute::AttributeValue;
    use prost::Message;
    use yoti_core::ContentType;

    #[test]
    fn test_duplicate_names_first_and_all() {
        let collection: AttributeCollection =
            [string("full_name", "Jenny Doe"), string("full_name", "J. Doe")].into_iter().collect();

        let first = collection.get_string_attribute("full_name").unwrap().unwrap();
        assert_eq!(first.value(), "Jenny Doe");

        let all = collection.get_attributes("full_name").unwrap();
        let values: Vec<_> = all.iter().map(|a| a.value().as_str().unwrap()).collect();
        assert_eq!(values, ["Jenny Doe", "J. Doe"]);
    }

    #[test]
    fn test_missing_is_none_not_error() {
        let collection = AttributeCollection::default();
        assert!(collection.get_attribute("full_name").unwrap().is_none());
        assert!(collection.get_attributes("full_name").unwrap().is_empty());
        assert!(collection.get_date_attribute("date_of_birth").unwrap().is_none());
    }

    #[test]
    fn test_bad_attribute_does_not_poison_others() {
        let collection: AttributeCollection = [
            raw("date_of_birth", ContentType::Date, b"not-a-date"),
            string("given_names", "Jenny"),
        ]
        .into_iter()
        .collect();

        assert!(collection.get_date_attribute("date_of_birth").is_err());
        assert_eq!(
            collection.get_string_attribute("given_names").unwrap().unwrap().value(),
            "Jenny"
        );
    }

    #[test]
    fn test_get_attribute_by_id() {
        let mut a = string("given_names", "Jenny");
        a.ephemeral_id = "id-1".into();
        let mut b = string("family_name", "Doe");
        b.ephemeral_id = "id-2".into();
        let collection = AttributeCollection::new(vec![a, b]);

        let found = collection.get_attribute_by_id("id-2").unwrap().unwrap();
        assert_eq!(found.name(), "family_name");
        assert!(collection.get_attribute_by_id("id-3").unwrap().is_none());
    }

    #[test]
    fn test_json_keeps_string_values_verbatim() {
        let collection = AttributeCollection::new(vec![raw(
            "structured_postal_address",
            ContentType::Json,
            br#"{"address_format":"2","building":"House No.86-A"}"#,
        )]);
        let attr = collection.get_json_attribute("structured_postal_address").unwrap().unwrap();
        assert_eq!(attr.value()["address_format"], serde_json::Value::String("2".into()));
        assert_eq!(attr.value()["building"].as_str(), Some("House No.86-A"));
    }

    #[test]
    fn test_decode_attribute_list() {
        let bytes = AttributeList {
            attributes: vec![raw("age", ContentType::Int, b"42")],
        }
        .encode_to_vec();
        let collection = AttributeCollection::decode(&bytes).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.get_attribute("age").unwrap().unwrap().value(),
            &AttributeValue::Int(42)
        );
    }

    #[test]
    fn test_decode_empty_and_malformed() {
        assert!(AttributeCollection::decode(&[]).unwrap().is_empty());
        assert!(matches!(AttributeCollection::decode(&[0x0a, 0x09]), Err(ParseError::Wire(_))));
    }
}
