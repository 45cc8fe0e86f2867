//! # Age Verification
//!
//! An age check is shared as an attribute named `<check_type>:<age>`
//! (`age_over:18`, `age_under:21`) whose value is the text `true` or
//! `false`.
//!
//! Only the exact text `true` counts as a pass. `True`, `1` or `yes` are
//! all read as `false`.

use yoti_core::consts::{ATTR_AGE_OVER, ATTR_AGE_UNDER};
use yoti_core::{ParseError, RawAttribute};

use super::StringAttribute;

/// Derived result of an `age_over` / `age_under` check.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeVerification {
    check_type: String,
    age: i32,
    result: bool,
    attribute: StringAttribute,
}

impl AgeVerification {
    /// Derive a verification from its raw attribute.
    ///
    /// # Errors
    ///
    /// Fails if the name has no `:` separator, the age is not an integer, or
    /// the value is not UTF-8.
    pub fn new(raw: &RawAttribute) -> Result<Self, ParseError> {
        let reject = |reason: String| ParseError::AgeVerification {
            name: raw.name.clone(),
            reason,
        };

        let (check_type, age) = raw
            .name
            .split_once(':')
            .ok_or_else(|| reject("expected <check_type>:<age>".into()))?;
        let age = age
            .parse::<i32>()
            .map_err(|e| reject(format!("age {age:?} is not an integer: {e}")))?;

        let attribute = StringAttribute::from_raw(raw)?;
        let result = attribute.value() == "true";

        Ok(Self {
            check_type: check_type.to_string(),
            age,
            result,
            attribute,
        })
    }

    /// `age_over` or `age_under`.
    pub fn check_type(&self) -> &str {
        &self.check_type
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn result(&self) -> bool {
        self.result
    }

    /// The underlying attribute, with its anchors.
    pub fn attribute(&self) -> &StringAttribute {
        &self.attribute
    }
}

/// Whether `name` is an age-verification attribute name.
pub(crate) fn is_age_verification_name(name: &str) -> bool {
    [ATTR_AGE_OVER, ATTR_AGE_UNDER].iter().any(|prefix| {
        name.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(':'))
    })
}
