//! # Content-Type Dispatch
//!
//! Every attribute value is interpreted according to its [`ContentType`]
//! tag. [`parse_value`] matches the tag exhaustively, so adding a content
//! type to the wire schema does not compile until it is handled here.
//!
//! | Tag | Value |
//! |-----|-------|
//! | `STRING` | UTF-8 text, empty allowed |
//! | `DATE` | `YYYY-MM-DD` |
//! | `INT` | base-10 `i64` |
//! | `JSON` | object, numbers kept as written |
//! | `JPEG` / `PNG` | [`Image`] |
//! | `MULTI_VALUE` | nested list, any depth |
//! | `UNDEFINED` | text, lossy, never fails |

use chrono::NaiveDate;
use serde_json::{Map, Value};

use yoti_core::temporal::parse_attribute_date;
use yoti_core::{ContentType, ParseError};

use super::image::{Image, ImageType};
use super::multi_value::{parse_multi_value, MultiValueItem};

/// JSON object value of a `JSON` attribute.
pub type JsonMap = Map<String, Value>;

/// A parsed attribute value, one variant per content type.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    Date(NaiveDate),
    Int(i64),
    Json(JsonMap),
    Image(Image),
    MultiValue(Vec<MultiValueItem>),
    /// `UNDEFINED` or an unrecognised tag, read as text.
    Undefined(String),
}

impl AttributeValue {
    /// Content type this value was parsed from.
    pub fn content_type(&self) -> ContentType {
        match self {
            AttributeValue::String(_) => ContentType::String,
            AttributeValue::Date(_) => ContentType::Date,
            AttributeValue::Int(_) => ContentType::Int,
            AttributeValue::Json(_) => ContentType::Json,
            AttributeValue::Image(image) => match image.image_type() {
                ImageType::Jpeg => ContentType::Jpeg,
                ImageType::Png => ContentType::Png,
            },
            AttributeValue::MultiValue(_) => ContentType::MultiValue,
            AttributeValue::Undefined(_) => ContentType::Undefined,
        }
    }

    /// Text of a `STRING` or `UNDEFINED` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) | AttributeValue::Undefined(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&NaiveDate> {
        match self {
            AttributeValue::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&JsonMap> {
        match self {
            AttributeValue::Json(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&Image> {
        match self {
            AttributeValue::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_multi_value(&self) -> Option<&[MultiValueItem]> {
        match self {
            AttributeValue::MultiValue(items) => Some(items),
            _ => None,
        }
    }
}

/// Interpret `bytes` according to `content_type`.
pub fn parse_value(content_type: ContentType, bytes: &[u8]) -> Result<AttributeValue, ParseError> {
    match content_type {
        ContentType::String => utf8(bytes).map(AttributeValue::String),
        ContentType::Date => {
            let text = utf8(bytes)?;
            parse_attribute_date(&text).map(AttributeValue::Date)
        }
        ContentType::Int => parse_int(bytes).map(AttributeValue::Int),
        ContentType::Json => parse_json(bytes).map(AttributeValue::Json),
        ContentType::Jpeg => Ok(AttributeValue::Image(Image::new(ImageType::Jpeg, bytes.to_vec()))),
        ContentType::Png => Ok(AttributeValue::Image(Image::new(ImageType::Png, bytes.to_vec()))),
        ContentType::MultiValue => parse_multi_value(bytes).map(AttributeValue::MultiValue),
        ContentType::Undefined => Ok(AttributeValue::Undefined(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}

/// Strict UTF-8 decode of a text value.
pub(crate) fn utf8(bytes: &[u8]) -> Result<String, ParseError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ParseError::Utf8(e.to_string()))
}

pub(crate) fn parse_int(bytes: &[u8]) -> Result<i64, ParseError> {
    let text = utf8(bytes)?;
    text.parse::<i64>().map_err(|e| ParseError::Int {
        value: text.clone(),
        reason: e.to_string(),
    })
}

/// Decode a JSON object. Numbers keep their literal text, so `"2"` stays a
/// string and `12345678901234567890` stays exact.
pub(crate) fn parse_json(bytes: &[u8]) -> Result<JsonMap, ParseError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ParseError::Json(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ParseError::Json(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_string_verbatim_including_empty() {
        assert_eq!(
            parse_value(ContentType::String, b"").unwrap(),
            AttributeValue::String(String::new())
        );
        assert_eq!(
            parse_value(ContentType::String, " Jenny  ".as_bytes()).unwrap(),
            AttributeValue::String(" Jenny  ".into())
        );
    }

    #[test]
    fn test_string_rejects_invalid_utf8() {
        let err = parse_value(ContentType::String, &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ParseError::Utf8(_)));
    }

    #[test]
    fn test_date() {
        let value = parse_value(ContentType::Date, b"1985-03-15").unwrap();
        assert_eq!(value.as_date(), NaiveDate::from_ymd_opt(1985, 3, 15).as_ref());
    }

    #[test]
    fn test_bad_date_names_input() {
        let err = parse_value(ContentType::Date, b"1985-13-45").unwrap_err();
        assert!(err.to_string().contains("1985-13-45"));
    }

    #[test]
    fn test_date_must_be_zero_padded() {
        for bytes in [&b"1985-3-5"[..], b"+1985-03-15", b" 1985-03-15"] {
            assert!(matches!(parse_value(ContentType::Date, bytes), Err(ParseError::Date { .. })));
        }
    }

    #[test]
    fn test_int() {
        assert_eq!(parse_value(ContentType::Int, b"-42").unwrap(), AttributeValue::Int(-42));
    }

    #[test]
    fn test_non_numeric_int_is_error_not_zero() {
        let err = parse_value(ContentType::Int, b"forty-two").unwrap_err();
        assert!(matches!(err, ParseError::Int { ref value, .. } if value == "forty-two"));
        assert!(parse_value(ContentType::Int, b"").is_err());
    }

    #[test]
    fn test_json_keeps_string_numbers_as_strings() {
        let value = parse_value(
            ContentType::Json,
            br#"{"address_format":"2","building":"House No.86-A"}"#,
        )
        .unwrap();
        let map = value.as_json().unwrap();
        assert_eq!(map["address_format"], Value::String("2".into()));
        assert_eq!(map["building"], Value::String("House No.86-A".into()));
    }

    #[test]
    fn test_json_large_integer_is_exact() {
        let value = parse_value(ContentType::Json, br#"{"n":12345678901234567890123}"#).unwrap();
        let map = value.as_json().unwrap();
        assert_eq!(map["n"].to_string(), "12345678901234567890123");
    }

    #[test]
    fn test_json_non_object_rejected() {
        assert!(matches!(
            parse_value(ContentType::Json, b"[1,2]"),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(
            parse_value(ContentType::Json, b"{not json"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_images_carry_type() {
        let jpeg = parse_value(ContentType::Jpeg, &[1, 2, 3]).unwrap();
        assert_eq!(jpeg.content_type(), ContentType::Jpeg);
        assert_eq!(jpeg.as_image().unwrap().data(), &[1, 2, 3]);
        let png = parse_value(ContentType::Png, &[4]).unwrap();
        assert_eq!(png.as_image().unwrap().mime_type(), "image/png");
    }

    #[test]
    fn test_undefined_is_lossy_text() {
        assert_eq!(
            parse_value(ContentType::Undefined, b"opaque").unwrap(),
            AttributeValue::Undefined("opaque".into())
        );
        let lossy = parse_value(ContentType::Undefined, &[b'a', 0xff]).unwrap();
        assert_eq!(lossy.as_str(), Some("a\u{fffd}"));
    }

    fn content_type_strategy() -> impl Strategy<Value = ContentType> {
        prop_oneof![
            Just(ContentType::Undefined),
            Just(ContentType::String),
            Just(ContentType::Jpeg),
            Just(ContentType::Date),
            Just(ContentType::Png),
            Just(ContentType::Json),
            Just(ContentType::MultiValue),
            Just(ContentType::Int),
        ]
    }

    proptest! {
        /// Parsing is a pure function of (tag, bytes).
        #[test]
        fn parse_is_deterministic(
            content_type in content_type_strategy(),
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let a = parse_value(content_type, &bytes);
            let b = parse_value(content_type, &bytes);
            prop_assert_eq!(a, b);
        }

        /// Successful parses report the tag they were parsed from.
        #[test]
        fn parsed_value_reports_its_tag(
            content_type in content_type_strategy(),
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            if let Ok(value) = parse_value(content_type, &bytes) {
                prop_assert_eq!(value.content_type(), content_type);
            }
        }
    }
}
