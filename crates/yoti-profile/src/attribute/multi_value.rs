//! # Multi-Value Attributes
//!
//! A `MULTI_VALUE` attribute is a protobuf `MultiValue` list whose items
//! carry their own content type. Items are dispatched through the same
//! [`parse_value`] as top-level attributes, so a `MULTI_VALUE` item nests
//! another list.
//!
//! Nested lists are decoded with an explicit stack of open levels, and
//! dropped the same way, so nesting depth is bounded by memory rather than
//! by the call stack.

use yoti_core::proto::{self, MultiValue};
use yoti_core::{ContentType, ParseError};

use super::image::Image;
use super::value::{parse_value, AttributeValue};

/// One item of a multi-value list.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiValueItem {
    content_type: ContentType,
    value: AttributeValue,
}

impl MultiValueItem {
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn value(&self) -> &AttributeValue {
        &self.value
    }

    pub fn into_value(mut self) -> AttributeValue {
        std::mem::replace(&mut self.value, AttributeValue::MultiValue(Vec::new()))
    }
}

impl Drop for MultiValueItem {
    fn drop(&mut self) {
        let AttributeValue::MultiValue(items) = &mut self.value else {
            return;
        };
        let mut pending = std::mem::take(items);
        while let Some(mut item) = pending.pop() {
            if let AttributeValue::MultiValue(inner) = &mut item.value {
                pending.append(inner);
            }
        }
    }
}

/// A list being filled while its nested lists are decoded.
struct Level {
    pending: std::vec::IntoIter<proto::multi_value::Value>,
    parsed: Vec<MultiValueItem>,
}

impl Level {
    fn decode(bytes: &[u8]) -> Result<Self, ParseError> {
        let multi_value: MultiValue = proto::decode("MultiValue", bytes)?;
        Ok(Level {
            parsed: Vec::with_capacity(multi_value.values.len()),
            pending: multi_value.values.into_iter(),
        })
    }
}

/// Decode and parse a `MultiValue` message, preserving item order.
pub fn parse_multi_value(bytes: &[u8]) -> Result<Vec<MultiValueItem>, ParseError> {
    let mut open: Vec<Level> = Vec::new();
    let mut current = Level::decode(bytes)?;
    loop {
        match current.pending.next() {
            Some(item) if item.content_type() == ContentType::MultiValue => {
                let nested = Level::decode(&item.data)?;
                open.push(std::mem::replace(&mut current, nested));
            }
            Some(item) => {
                let content_type = item.content_type();
                let value = parse_value(content_type, &item.data)?;
                current.parsed.push(MultiValueItem { content_type, value });
            }
            None => {
                let Some(mut parent) = open.pop() else {
                    return Ok(current.parsed);
                };
                parent.parsed.push(MultiValueItem {
                    content_type: ContentType::MultiValue,
                    value: AttributeValue::MultiValue(current.parsed),
                });
                current = parent;
            }
        }
    }
}

/// Images of a flat multi-value list, such as `document_images`.
///
/// Fails if any item is not a `JPEG` or `PNG`.
pub fn collect_images(name: &str, items: &[MultiValueItem]) -> Result<Vec<Image>, ParseError> {
    items
        .iter()
        .map(|item| match item.value() {
            AttributeValue::Image(image) => Ok(image.clone()),
            other => Err(ParseError::UnexpectedContentType {
                name: name.to_string(),
                expected: "JPEG or PNG",
                actual: other.content_type().name(),
            }),
        })
        .collect()
}
