//! # Document Details
//!
//! `document_details` is a single space-separated string:
//!
//! ```text
//! DOCUMENT_TYPE ISSUING_COUNTRY DOCUMENT_NUMBER [EXPIRY|-] [ISSUING_AUTHORITY]
//! PASSPORT GBR 01234567 2030-06-01 HMPO
//! DRIVING_LICENCE GBR 1234abc - DVLA
//! ```
//!
//! An expiry of `-` means the document does not expire.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use yoti_core::temporal::parse_attribute_date;
use yoti_core::ParseError;

const VALIDATION_PATTERN: &str = r"^[A-Za-z_]* [A-Za-z]{3} [A-Za-z0-9]{1}.*$";

fn is_well_formed(data: &str) -> bool {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VALIDATION_PATTERN))
        .as_ref()
        .is_ok_and(|re| re.is_match(data))
}

/// Identity document summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDetails {
    pub document_type: String,
    pub issuing_country: String,
    pub document_number: String,
    pub expiration_date: Option<NaiveDate>,
    pub issuing_authority: Option<String>,
}

impl DocumentDetails {
    /// Parse the space-separated `document_details` value.
    pub fn parse(data: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::DocumentDetails(data.to_string());

        if !is_well_formed(data) {
            return Err(invalid());
        }
        let sections: Vec<&str> = data.split(' ').collect();
        if sections.len() < 3 || sections.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        let expiration_date = match sections.get(3) {
            Some(&"-") | None => None,
            Some(date) => Some(parse_attribute_date(date)?),
        };

        Ok(Self {
            document_type: sections[0].to_string(),
            issuing_country: sections[1].to_string(),
            document_number: sections[2].to_string(),
            expiration_date,
            issuing_authority: sections.get(4).map(|s| s.to_string()),
        })
    }
}
