//! # Application Profile
//!
//! Attributes describing the relying application, as configured in the
//! Yoti Hub and echoed back in every receipt.

use yoti_core::consts::{
    ATTR_APPLICATION_LOGO, ATTR_APPLICATION_NAME, ATTR_APPLICATION_RECEIPT_BG_COLOR,
    ATTR_APPLICATION_URL,
};
use yoti_core::ParseError;

use crate::attribute::{GenericAttribute, ImageAttribute, StringAttribute};

use super::AttributeCollection;

/// Attributes of the application the user shared with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationProfile {
    attributes: AttributeCollection,
}

impl ApplicationProfile {
    pub fn new(attributes: AttributeCollection) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &AttributeCollection {
        &self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Result<Option<GenericAttribute>, ParseError> {
        self.attributes.get_attribute(name)
    }

    pub fn application_name(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_APPLICATION_NAME)
    }

    pub fn application_url(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_APPLICATION_URL)
    }

    pub fn application_logo(&self) -> Result<Option<ImageAttribute>, ParseError> {
        self.attributes.get_image_attribute(ATTR_APPLICATION_LOGO)
    }

    /// Receipt background colour, e.g. `#ffffff`.
    pub fn application_receipt_bg_color(&self) -> Result<Option<StringAttribute>, ParseError> {
        self.attributes.get_string_attribute(ATTR_APPLICATION_RECEIPT_BG_COLOR)
    }
}
