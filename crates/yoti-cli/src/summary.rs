//! # JSON Summary
//!
//! Renders decoded receipts for the terminal. Each attribute is parsed on
//! its own; one that fails is shown with its error instead of a value.

use serde_json::{json, Value};

use yoti_profile::{
    ActivityDetails, Anchor, AttributeCollection, AttributeValue, GenericAttribute, MultiValueItem,
    ReceiptError,
};

/// Summary of fully decoded activity details.
pub fn activity_details(details: &ActivityDetails) -> Value {
    json!({
        "receipt_id": details.receipt_id(),
        "remember_me_id": details.remember_me_id(),
        "parent_remember_me_id": details.parent_remember_me_id(),
        "timestamp": details.timestamp().map(|t| t.to_rfc3339()),
        "user_profile": attributes(details.user_profile().attributes()),
        "application_profile": attributes(details.application_profile().attributes()),
        "extra_data": extra_data(details),
    })
}

/// Summary of a receipt error. Partial details are included when some
/// streams decoded.
pub fn receipt_error(error: &ReceiptError) -> Value {
    match error {
        ReceiptError::Content { partial, errors } => {
            let mut summary = activity_details(partial);
            summary["errors"] = errors
                .errors()
                .iter()
                .map(|e| json!({ "stream": e.stream.field_name(), "error": e.source.to_string() }))
                .collect();
            summary
        }
        other => json!({ "errors": [{ "error": other.to_string() }] }),
    }
}

fn attributes(collection: &AttributeCollection) -> Value {
    collection
        .raw_attributes()
        .iter()
        .map(|raw| match GenericAttribute::from_raw(raw) {
            Ok(attribute) => attribute_summary(&attribute),
            Err(e) => json!({ "name": raw.name, "error": e.to_string() }),
        })
        .collect()
}

fn attribute_summary(attribute: &GenericAttribute) -> Value {
    json!({
        "name": attribute.name(),
        "content_type": attribute.content_type().name(),
        "value": render_value(attribute.value()),
        "sources": anchors(attribute.sources()),
        "verifiers": anchors(attribute.verifiers()),
    })
}

fn anchors(anchors: Vec<&Anchor>) -> Value {
    anchors
        .into_iter()
        .map(|a| {
            json!({
                "value": a.value(),
                "sub_type": a.sub_type(),
                "signed_at": a.signed_timestamp().map(|t| t.timestamp.to_rfc3339()),
            })
        })
        .collect()
}

fn render_value(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::String(s) | AttributeValue::Undefined(s) => Value::String(s.clone()),
        AttributeValue::Date(d) => Value::String(d.to_string()),
        AttributeValue::Int(i) => json!(i),
        AttributeValue::Json(map) => Value::Object(map.clone()),
        AttributeValue::Image(image) => Value::String(image.base64_url()),
        AttributeValue::MultiValue(items) => items.iter().map(MultiValueItem::value).map(render_value).collect(),
    }
}

fn extra_data(details: &ActivityDetails) -> Value {
    match details.extra_data().attribute_issuance_details() {
        Some(issuance) => json!({
            "attribute_issuance_details": {
                "token": issuance.token(),
                "expiry": issuance.expiry().map(|e| e.to_rfc3339()),
                "attributes": issuance.attributes().iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            }
        }),
        None => json!({}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;
    use yoti_core::proto::{multi_value, MultiValue};
    use yoti_core::{ContentType, RawAttribute};
    use yoti_profile::MultiError;

    fn raw(name: &str, content_type: ContentType, value: &[u8]) -> RawAttribute {
        RawAttribute {
            name: name.into(),
            value: value.to_vec(),
            content_type: content_type as i32,
            anchors: vec![],
            ephemeral_id: String::new(),
        }
    }

    #[test]
    fn renders_each_content_type() {
        let nested = MultiValue {
            values: vec![multi_value::Value {
                content_type: ContentType::String as i32,
                data: b"inner".to_vec(),
            }],
        }
        .encode_to_vec();
        let collection = AttributeCollection::new(vec![
            raw("full_name", ContentType::String, b"Jenny Doe"),
            raw("date_of_birth", ContentType::Date, b"1985-03-15"),
            raw("age", ContentType::Int, b"38"),
            raw("address", ContentType::Json, br#"{"address_format":"2"}"#),
            raw("selfie", ContentType::Jpeg, b"\xff\xd8"),
            raw("list", ContentType::MultiValue, &nested),
        ]);

        let rendered = attributes(&collection);
        assert_eq!(rendered[0]["value"], "Jenny Doe");
        assert_eq!(rendered[1]["value"], "1985-03-15");
        assert_eq!(rendered[2]["value"], json!(38));
        assert_eq!(rendered[3]["value"]["address_format"], "2");
        assert_eq!(rendered[4]["value"], "data:image/jpeg;base64,/9g=");
        assert_eq!(rendered[5]["value"], json!(["inner"]));
        assert_eq!(rendered[5]["content_type"], "MULTI_VALUE");
    }

    #[test]
    fn bad_attribute_renders_error_only_for_itself() {
        let collection = AttributeCollection::new(vec![
            raw("date_of_birth", ContentType::Date, b"never"),
            raw("given_names", ContentType::String, b"Jenny"),
        ]);
        let rendered = attributes(&collection);
        assert!(rendered[0]["error"].as_str().unwrap().contains("never"));
        assert_eq!(rendered[1]["value"], "Jenny");
    }

    #[test]
    fn content_error_includes_partial_details() {
        let mut errors = MultiError::new();
        errors.push(
            yoti_profile::ContentStream::ExtraData,
            yoti_profile::ParseError::EmptyIssuanceToken,
        );
        let error = ReceiptError::Content {
            partial: Box::default(),
            errors,
        };

        let rendered = receipt_error(&error);
        assert_eq!(rendered["errors"][0]["stream"], "extra_data_content");
        assert_eq!(rendered["user_profile"], json!([]));
    }
}
