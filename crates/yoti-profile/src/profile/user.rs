//! # User Profile
//!
//! Named accessors over the attributes the user shared. Every accessor
//! returns `Ok(None)` when the attribute was not shared and `Err` only when
//! it was shared but its value does not parse.

use yoti_core::consts::*;
use yoti_core::{ContentType, ParseError};

use crate::attribute::age::is_age_verification_name;
use crate::attribute::{
    AgeVerification, Attribute, DateAttribute, DocumentDetailsAttribute, GenericAttribute,
    ImageAttribute, ImageSliceAttribute, JsonAttribute, StringAttribute,
};

use super::AttributeCollection;

/// Age information, preferring an estimate over the date of birth.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatedAge {
    /// `estimated_age`, an age range such as `18-24`.
    Estimated(StringAttribute),
    DateOfBirth(DateAttribute),
}

impl EstimatedAge {
    pub fn used_estimated_age(&self) -> bool {
        matches!(self, EstimatedAge::Estimated(_))
    }
}

/// Attributes shared by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    attributes: AttributeCollection,
}

impl UserProfile {
    pub fn new(attributes: AttributeCollection) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &AttributeCollection {
        &self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Result<Option<GenericAttribute>, ParseError> {
        self.attributes.get_attribute(name)
    }

    pub fn get_attributes(&self, name: &str) -> Result<Vec<GenericAttribute>, ParseError> {
        self.attributes.get_attributes(name)
    }

    pub fn get_attribute_by_id(&self, ephemeral_id: &str) -> Result<Option<GenericAttribute>, ParseError> {
        self.attributes.get_attribute_by_id(ephemeral_id)
    }

    // -- Named attributes -----------------------------------------------------

    pub fn selfie(&self) -> Result<Option<ImageAttribute>, ParseError> {
        self.attributes.get_image_attribute(ATTR_SELFIE)
    }

    pub fn given_names(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_GIVEN_NAMES)
    }

    pub fn family_name(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_FAMILY_NAME)
    }

    pub fn full_name(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_FULL_NAME)
    }

    /// Mobile number, including the country code.
    pub fn mobile_number(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_MOBILE_NUMBER)
    }

    pub fn email_address(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_EMAIL_ADDRESS)
    }

    pub fn date_of_birth(&self) -> Result<Option<DateAttribute>, ParseError> {
        self.attributes.get_date_attribute(ATTR_DATE_OF_BIRTH)
    }

    pub fn estimated_age(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_ESTIMATED_AGE)
    }

    pub fn gender(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_GENDER)
    }

    pub fn nationality(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_NATIONALITY)
    }

    /// Postal address.
    ///
    /// When `postal_address` was not shared, falls back to the
    /// `formatted_address` of `structured_postal_address`, carrying the
    /// structured attribute's anchors.
    pub fn address(&self) -> Result<Option<StringAttribute>, ParseError> {
        if let Some(address) = self.attributes.get_string_attribute(ATTR_ADDRESS)? {
            return Ok(Some(address));
        }
        let Some(raw) = self.attributes.find(ATTR_STRUCTURED_POSTAL_ADDRESS) else {
            return Ok(None);
        };
        let structured = JsonAttribute::from_raw(raw)?;
        Ok(structured
            .value()
            .get(FORMATTED_ADDRESS_KEY)
            .and_then(|v| v.as_str())
            .map(|formatted| Attribute::derived(raw, ATTR_ADDRESS, ContentType::String, formatted.to_string())))
    }

    pub fn structured_postal_address(&self) -> Result<Option<JsonAttribute>, ParseError> {
        self.attributes.get_json_attribute(ATTR_STRUCTURED_POSTAL_ADDRESS)
    }

    pub fn document_details(&self) -> Result<Option<DocumentDetailsAttribute>, ParseError> {
        self.attributes.get_typed(ATTR_DOCUMENT_DETAILS)
    }

    pub fn document_images(&self) -> Result<Option<ImageSliceAttribute>, ParseError> {
        self.attributes.get_typed(ATTR_DOCUMENT_IMAGES)
    }

    pub fn identity_profile_report(&self) -> Result<Option<JsonAttribute>, ParseError> {
        self.attributes.get_json_attribute(ATTR_IDENTITY_PROFILE_REPORT)
    }

    // -- Age ------------------------------------------------------------------

    /// Every `age_over:N` / `age_under:N` check, in wire order.
    pub fn age_verifications(&self) -> Result<Vec<AgeVerification>, ParseError> {
        self.attributes
            .raw_attributes()
            .iter()
            .filter(|a| is_age_verification_name(&a.name))
            .map(AgeVerification::new)
            .collect()
    }

    /// The `age_over:{age}` check, if shared.
    pub fn age_over_verification(&self, age: i32) -> Result<Option<AgeVerification>, ParseError> {
        self.age_verification(&format!("{ATTR_AGE_OVER}:{age}"))
    }

    /// The `age_under:{age}` check, if shared.
    pub fn age_under_verification(&self, age: i32) -> Result<Option<AgeVerification>, ParseError> {
        self.age_verification(&format!("{ATTR_AGE_UNDER}:{age}"))
    }

    fn age_verification(&self, name: &str) -> Result<Option<AgeVerification>, ParseError> {
        self.attributes.find(name).map(AgeVerification::new).transpose()
    }

    /// `estimated_age` if shared, else `date_of_birth`, else `None`.
    pub fn estimated_age_with_fallback(&self) -> Result<Option<EstimatedAge>, ParseError> {
        if let Some(estimated) = self.estimated_age()? {
            return Ok(Some(EstimatedAge::Estimated(estimated)));
        }
        Ok(self.date_of_birth()?.map(EstimatedAge::DateOfBirth))
    }
}
