//! # Temporal Parsing
//!
//! Three wire representations of time reach the SDK:
//!
//! - Attribute dates: `YYYY-MM-DD`, no time component.
//! - Issuance expiry and receipt timestamps: RFC 3339. The platform emits
//!   expiry as `2006-01-02T15:04:05.000Z` (millisecond precision, literal
//!   `Z`), but any RFC 3339 offset is accepted and converted to UTC.
//! - Signed timestamps: microseconds since the Unix epoch.
//!
//! None of these parsers fall back to a zero value. A bad input is a
//! [`ParseError`] naming the offending string.

use chrono::{DateTime, NaiveDate, Utc};

use crate::consts::{ATTRIBUTE_DATE_FORMAT, ISSUANCE_EXPIRY_FORMAT};
use crate::error::ParseError;

/// Parse an attribute date (`YYYY-MM-DD`).
///
/// Exactly ten characters: four-digit year, two-digit month and day. No
/// sign, padding or surrounding whitespace.
pub fn parse_attribute_date(s: &str) -> Result<NaiveDate, ParseError> {
    if !is_date_shaped(s) {
        return Err(ParseError::Date {
            value: s.to_string(),
            reason: "expected YYYY-MM-DD".into(),
        });
    }
    NaiveDate::parse_from_str(s, ATTRIBUTE_DATE_FORMAT).map_err(|e| ParseError::Date {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

fn is_date_shaped(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse an issuance expiry. An empty string means "no expiry".
pub fn parse_expiry(s: &str) -> Result<Option<DateTime<Utc>>, ParseError> {
    if s.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|e| ParseError::Expiry {
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Render an expiry the way the platform emits it.
pub fn format_expiry(dt: &DateTime<Utc>) -> String {
    dt.format(ISSUANCE_EXPIRY_FORMAT).to_string()
}

/// Parse a receipt-level RFC 3339 timestamp.
pub fn parse_receipt_timestamp(s: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ParseError::Timestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })
}

/// Convert signed-timestamp microseconds to a UTC instant.
///
/// Returns `None` if the value is outside chrono's representable range.
pub fn from_epoch_micros(micros: u64) -> Option<DateTime<Utc>> {
    let micros = i64::try_from(micros).ok()?;
    let secs = micros.div_euclid(1_000_000);
    let nanos = u32::try_from(micros.rem_euclid(1_000_000) * 1_000).ok()?;
    DateTime::from_timestamp(secs, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_attribute_date_parses() {
        let date = parse_attribute_date("1985-03-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1985, 3, 15));
    }

    #[test]
    fn test_attribute_date_error_names_input() {
        let err = parse_attribute_date("15/03/1985").unwrap_err();
        assert!(matches!(&err, ParseError::Date { value, .. } if value == "15/03/1985"));
        assert!(err.to_string().contains("15/03/1985"));
    }

    #[test]
    fn test_attribute_date_requires_exact_layout() {
        for input in ["1985-3-5", "1985-03-5", "+1985-03-15", " 1985-03-15", "1985-03-15 ", "85-03-15", "1985/03/15"] {
            let err = parse_attribute_date(input).unwrap_err();
            assert!(
                matches!(&err, ParseError::Date { value, .. } if value == input),
                "{input:?} should be rejected, got: {err:?}"
            );
        }
    }

    #[test]
    fn test_attribute_date_shape_still_checks_calendar() {
        assert!(parse_attribute_date("1985-02-30").is_err());
        assert!(parse_attribute_date("1984-02-29").is_ok());
    }

    #[test]
    fn test_attribute_date_rejects_empty() {
        assert!(parse_attribute_date("").is_err());
    }

    #[test]
    fn test_expiry_empty_is_none() {
        assert_eq!(parse_expiry("").unwrap(), None);
    }

    #[test]
    fn test_expiry_platform_format() {
        let expiry = parse_expiry("2019-10-15T22:04:05.123Z").unwrap().unwrap();
        assert_eq!(expiry.timestamp_subsec_millis(), 123);
        assert_eq!(expiry.hour(), 22);
        assert_eq!(format_expiry(&expiry), "2019-10-15T22:04:05.123Z");
    }

    #[test]
    fn test_expiry_offset_converted_to_utc() {
        let expiry = parse_expiry("2019-10-15T22:04:05+01:00").unwrap().unwrap();
        assert_eq!(expiry.hour(), 21);
    }

    #[test]
    fn test_expiry_invalid_is_error() {
        let err = parse_expiry("2006-13-40").unwrap_err();
        assert!(matches!(err, ParseError::Expiry { .. }));
    }

    #[test]
    fn test_receipt_timestamp() {
        let ts = parse_receipt_timestamp("2016-07-19T08:55:38Z").unwrap();
        assert_eq!(ts.timestamp(), 1_468_918_538);
        assert!(parse_receipt_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_epoch_micros() {
        let ts = from_epoch_micros(1_580_000_000_123_456).unwrap();
        assert_eq!(ts.timestamp(), 1_580_000_000);
        assert_eq!(ts.timestamp_subsec_micros(), 123_456);
        assert!(from_epoch_micros(u64::MAX).is_none());
    }
}
