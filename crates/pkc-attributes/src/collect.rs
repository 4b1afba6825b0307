use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::{Attribute, AttributeContent, AttributeDescriptor, AttributeType, FieldKey};

/// Name of the form bucket holding the dynamic fields of one attribute group.
pub fn attribute_bucket(group: &str) -> String {
    format!("__attributes__{group}__")
}

/// Marshals the raw form values of one attribute group into the attribute
/// list sent to the backend.
///
/// Best-effort by contract: entries the layer cannot coerce are dropped, not
/// errored — required-ness and format validation happen in the form layer
/// before submit. Every drop is an explicit branch logged at debug level.
pub fn collect_form_attributes(
    group: &str,
    descriptors: Option<&[AttributeDescriptor]>,
    values: &Map<String, Value>,
) -> Vec<Attribute> {
    let Some(descriptors) = descriptors else {
        return Vec::new();
    };
    let Some(Value::Object(bucket)) = values.get(&attribute_bucket(group)) else {
        return Vec::new();
    };

    let mut attributes = Vec::new();

    for (raw_key, raw_value) in bucket {
        let key = match FieldKey::parse(raw_key) {
            Ok(key) => key,
            Err(err) => {
                tracing::debug!(key = %raw_key, %err, "dropping entry: malformed field key");
                continue;
            }
        };

        // The key's declared type may be stale; the descriptor is authoritative.
        let Some(descriptor) = descriptors.iter().find(|d| d.name == key.name) else {
            tracing::debug!(name = %key.name, "dropping entry: no matching descriptor");
            continue;
        };

        if raw_value.is_null() {
            tracing::debug!(name = %key.name, "dropping entry: value not set");
            continue;
        }

        let content = match coerce(descriptor, raw_value) {
            Ok(content) => content,
            Err(drop) => {
                tracing::debug!(
                    name = %key.name,
                    attr_type = %descriptor.attr_type,
                    reason = drop.reason(),
                    "dropping entry"
                );
                continue;
            }
        };

        attributes.push(Attribute {
            name: key.name,
            uuid: key.instance,
            content,
        });
    }

    attributes
}

#[derive(Clone, Copy)]
enum DropReason {
    UnsupportedList,
    NotNumeric,
    NotText,
    BadOptionShape,
    BadTimestamp,
    EmptyContent,
}

impl DropReason {
    fn reason(&self) -> &'static str {
        match self {
            DropReason::UnsupportedList => "multi-value unsupported for this type",
            DropReason::NotNumeric => "value is not numeric",
            DropReason::NotText => "value is not usable as text",
            DropReason::BadOptionShape => "option object has no usable value",
            DropReason::BadTimestamp => "value is not a recognizable timestamp",
            DropReason::EmptyContent => "coerced content is empty",
        }
    }
}

fn coerce(descriptor: &AttributeDescriptor, raw: &Value) -> Result<AttributeContent, DropReason> {
    let multi_valued = descriptor.list || descriptor.multi_select;
    let content = match descriptor.attr_type {
        AttributeType::Boolean
        | AttributeType::Text
        | AttributeType::Time
        | AttributeType::Secret => {
            if multi_valued {
                return Err(DropReason::UnsupportedList);
            }
            AttributeContent::wrapped(raw.clone())
        }
        AttributeType::Integer => {
            coerce_dual_shape(descriptor, raw, parse_integer, DropReason::NotNumeric)?
        }
        AttributeType::Float => {
            coerce_dual_shape(descriptor, raw, parse_float, DropReason::NotNumeric)?
        }
        AttributeType::String => {
            coerce_dual_shape(descriptor, raw, |value| Some(value.clone()), DropReason::NotText)?
        }
        AttributeType::Date | AttributeType::Datetime => {
            if multi_valued {
                return Err(DropReason::UnsupportedList);
            }
            let stamp = normalize_timestamp(raw).ok_or(DropReason::BadTimestamp)?;
            AttributeContent::wrapped(stamp)
        }
        AttributeType::File => {
            if multi_valued {
                return Err(DropReason::UnsupportedList);
            }
            AttributeContent::Raw(raw.clone())
        }
        AttributeType::Credential | AttributeType::Json => {
            if descriptor.list {
                match raw {
                    Value::Array(_) => unwrap_options(raw, |value| Some(value.clone()))?,
                    Value::Object(object) => match object.get("value") {
                        Some(inner) => AttributeContent::Raw(inner.clone()),
                        None => return Err(DropReason::BadOptionShape),
                    },
                    _ => return Err(DropReason::BadOptionShape),
                }
            } else {
                AttributeContent::Raw(raw.clone())
            }
        }
    };

    match &content {
        AttributeContent::Object(object) if object.value.is_null() => Err(DropReason::EmptyContent),
        AttributeContent::List(items) if items.is_empty() => Err(DropReason::EmptyContent),
        _ => Ok(content),
    }
}

/// Integer, float and string fields share their shape handling: a scalar
/// input, an array of option objects, or a single option object whose
/// `value` field holds the selected option.
fn coerce_dual_shape(
    descriptor: &AttributeDescriptor,
    raw: &Value,
    parse: fn(&Value) -> Option<Value>,
    parse_failure: DropReason,
) -> Result<AttributeContent, DropReason> {
    if descriptor.list {
        match raw {
            Value::Array(_) => unwrap_options(raw, parse),
            Value::Object(object) => {
                let selected = object
                    .get("value")
                    .and_then(|option| option.get("value"))
                    .ok_or(DropReason::BadOptionShape)?;
                let parsed = parse(selected).ok_or(parse_failure)?;
                Ok(AttributeContent::wrapped(parsed))
            }
            _ => Err(DropReason::BadOptionShape),
        }
    } else {
        let parsed = parse(raw).ok_or(parse_failure)?;
        Ok(AttributeContent::wrapped(parsed))
    }
}

/// Unwraps an array of `{value, label}` option objects into a plain value
/// list, mapping each selected value through `map`. Elements without a
/// usable value are skipped; a list that ends up empty is dropped by the
/// caller's final guard.
fn unwrap_options(
    raw: &Value,
    map: fn(&Value) -> Option<Value>,
) -> Result<AttributeContent, DropReason> {
    let Value::Array(options) = raw else {
        return Err(DropReason::BadOptionShape);
    };
    let values = options
        .iter()
        .filter_map(|option| option.get("value"))
        .filter_map(map)
        .collect();
    Ok(AttributeContent::List(values))
}

fn parse_integer(raw: &Value) -> Option<Value> {
    match raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
            .map(Value::from),
        Value::String(text) => text.trim().parse::<i64>().ok().map(Value::from),
        _ => None,
    }
}

fn parse_float(raw: &Value) -> Option<Value> {
    let parsed = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    serde_json::Number::from_f64(parsed).map(Value::Number)
}

/// Normalizes date and datetime inputs to `YYYY-MM-DDTHH:MM:SS.mmmZ`.
/// RFC 3339 inputs keep their instant; naive inputs are taken as UTC;
/// numbers are epoch milliseconds.
fn normalize_timestamp(raw: &Value) -> Option<String> {
    const OUT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
    match raw {
        Value::String(text) => {
            let utc = if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
                parsed.with_timezone(&Utc)
            } else if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
                naive.and_utc()
            } else if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M") {
                naive.and_utc()
            } else if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                date.and_hms_opt(0, 0, 0)?.and_utc()
            } else {
                return None;
            };
            Some(utc.format(OUT).to_string())
        }
        Value::Number(number) => {
            let millis = number.as_i64()?;
            Some(DateTime::from_timestamp_millis(millis)?.format(OUT).to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn descriptor(name: &str, attr_type: AttributeType) -> AttributeDescriptor {
        AttributeDescriptor {
            uuid: Uuid::nil(),
            name: name.into(),
            attr_type,
            label: name.into(),
            description: None,
            group: None,
            required: false,
            read_only: false,
            visible: true,
            list: false,
            multi_select: false,
            validation_regex: None,
            attribute_callback: None,
            content: None,
        }
    }

    fn list_descriptor(name: &str, attr_type: AttributeType) -> AttributeDescriptor {
        AttributeDescriptor {
            list: true,
            ..descriptor(name, attr_type)
        }
    }

    fn form(group: &str, bucket: Value) -> Map<String, Value> {
        let mut values = Map::new();
        values.insert(attribute_bucket(group), bucket);
        values
    }

    #[test]
    fn no_descriptors_yields_empty_list() {
        let values = form("csr", json!({"port:INTEGER": "8443"}));
        assert!(collect_form_attributes("csr", None, &values).is_empty());
    }

    #[test]
    fn missing_bucket_yields_empty_list() {
        let descriptors = [descriptor("port", AttributeType::Integer)];
        let values = form("other", json!({"port:INTEGER": "8443"}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn untouched_descriptors_produce_no_attributes() {
        let descriptors = [
            descriptor("host", AttributeType::String),
            descriptor("port", AttributeType::Integer),
        ];
        let values = form("csr", json!({"host:STRING": "ca.example.com"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "host");
    }

    #[test]
    fn entry_without_descriptor_is_dropped() {
        let descriptors = [descriptor("host", AttributeType::String)];
        let values = form(
            "csr",
            json!({"host:STRING": "ca.example.com", "removed:STRING": "stale"}),
        );
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "host");
    }

    #[test]
    fn null_value_is_dropped() {
        let descriptors = [descriptor("host", AttributeType::String)];
        let values = form("csr", json!({"host:STRING": null}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn boolean_list_is_unsupported() {
        let descriptors = [list_descriptor("flags", AttributeType::Boolean)];
        let values = form("csr", json!({"flags:BOOLEAN": [true, false]}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn boolean_scalar_passes_through() {
        let descriptors = [descriptor("enabled", AttributeType::Boolean)];
        let values = form("csr", json!({"enabled:BOOLEAN": true}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::wrapped(true));
    }

    #[test]
    fn integer_list_parses_option_array() {
        let descriptors = [list_descriptor("ports", AttributeType::Integer)];
        let values = form(
            "csr",
            json!({"ports:INTEGER": [{"value": "1", "label": "1"}, {"value": "2", "label": "2"}]}),
        );
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::List(vec![json!(1), json!(2)]));
    }

    #[test]
    fn integer_list_singleton_shape_unwraps() {
        let descriptors = [list_descriptor("port", AttributeType::Integer)];
        let values = form("csr", json!({"port:INTEGER": {"value": {"value": "7", "label": "7"}}}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::wrapped(7));
    }

    #[test]
    fn integer_scalar_accepts_string_and_number() {
        let descriptors = [descriptor("port", AttributeType::Integer)];
        let values = form("csr", json!({"port:INTEGER": "8443"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::wrapped(8443));

        let values = form("csr", json!({"port:INTEGER": 8443}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::wrapped(8443));
    }

    #[test]
    fn unparseable_integer_is_dropped() {
        let descriptors = [descriptor("port", AttributeType::Integer)];
        let values = form("csr", json!({"port:INTEGER": "not-a-number"}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn float_scalar_parses() {
        let descriptors = [descriptor("threshold", AttributeType::Float)];
        let values = form("csr", json!({"threshold:FLOAT": "0.75"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::wrapped(0.75));
    }

    #[test]
    fn string_list_keeps_option_values() {
        let descriptors = [list_descriptor("sans", AttributeType::String)];
        let values = form(
            "csr",
            json!({"sans:STRING": [{"value": "a.example.com"}, {"value": "b.example.com"}]}),
        );
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(
            attrs[0].content,
            AttributeContent::List(vec![json!("a.example.com"), json!("b.example.com")])
        );
    }

    #[test]
    fn string_list_singleton_shape_unwraps() {
        let descriptors = [list_descriptor("sans", AttributeType::String)];
        let values = form(
            "csr",
            json!({"sans:STRING": {"value": {"value": "a.example.com", "label": "a"}}}),
        );
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::wrapped("a.example.com"));
    }

    #[test]
    fn string_list_singleton_without_value_is_dropped() {
        let descriptors = [list_descriptor("sans", AttributeType::String)];
        let values = form("csr", json!({"sans:STRING": {"value": {"label": "a"}}}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn date_normalizes_to_utc_midnight() {
        let descriptors = [descriptor("notBefore", AttributeType::Date)];
        let values = form("csr", json!({"notBefore:DATE": "2024-01-01"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(
            attrs[0].content,
            AttributeContent::wrapped("2024-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn datetime_keeps_instant_of_offset_input() {
        let descriptors = [descriptor("expiry", AttributeType::Datetime)];
        let values = form("csr", json!({"expiry:DATETIME": "2024-06-01T12:30:00+02:00"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(
            attrs[0].content,
            AttributeContent::wrapped("2024-06-01T10:30:00.000Z")
        );
    }

    #[test]
    fn unparseable_date_is_dropped() {
        let descriptors = [descriptor("notBefore", AttributeType::Date)];
        let values = form("csr", json!({"notBefore:DATE": "yesterday"}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn file_payload_passes_through() {
        let descriptors = [descriptor("certificate", AttributeType::File)];
        let payload = json!({
            "value": "LS0tLS1CRUdJTg==",
            "fileName": "cert.pem",
            "contentType": "application/x-pem-file"
        });
        let values = form("upload", json!({"certificate:FILE": payload}));
        let attrs = collect_form_attributes("upload", Some(&descriptors), &values);
        assert_eq!(serde_json::to_value(&attrs[0].content).unwrap(), payload);
    }

    #[test]
    fn credential_list_unwraps_option_array() {
        let descriptors = [list_descriptor("credential", AttributeType::Credential)];
        let values = form(
            "issue",
            json!({"credential:CREDENTIAL": [{"value": {"uuid": "c-1", "name": "soft-hsm"}}]}),
        );
        let attrs = collect_form_attributes("issue", Some(&descriptors), &values);
        assert_eq!(
            attrs[0].content,
            AttributeContent::List(vec![json!({"uuid": "c-1", "name": "soft-hsm"})])
        );
    }

    #[test]
    fn credential_list_singleton_unwraps_once() {
        let descriptors = [list_descriptor("credential", AttributeType::Credential)];
        let values = form(
            "issue",
            json!({"credential:CREDENTIAL": {"value": {"uuid": "c-1", "name": "soft-hsm"}}}),
        );
        let attrs = collect_form_attributes("issue", Some(&descriptors), &values);
        assert_eq!(
            serde_json::to_value(&attrs[0].content).unwrap(),
            json!({"uuid": "c-1", "name": "soft-hsm"})
        );
    }

    #[test]
    fn stale_declared_type_in_key_is_tolerated() {
        // Key still says STRING, descriptor has since become INTEGER.
        let descriptors = [descriptor("port", AttributeType::Integer)];
        let values = form("csr", json!({"port:STRING": "8443"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].content, AttributeContent::wrapped(8443));
    }

    #[test]
    fn instance_segment_becomes_uuid() {
        let descriptors = [descriptor("host", AttributeType::String)];
        let values = form("csr", json!({"host:STRING:uuid-123": "ca.example.com"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].uuid.as_deref(), Some("uuid-123"));

        let values = form("csr", json!({"host:STRING": "ca.example.com"}));
        let attrs = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(attrs[0].uuid, None);
        let wire = serde_json::to_value(&attrs[0]).unwrap();
        assert!(wire.get("uuid").is_none());
    }

    #[test]
    fn empty_option_list_is_dropped() {
        let descriptors = [list_descriptor("sans", AttributeType::String)];
        let values = form("csr", json!({"sans:STRING": []}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn wrapped_null_is_dropped() {
        let descriptors = [list_descriptor("sans", AttributeType::String)];
        let values = form("csr", json!({"sans:STRING": {"value": {"value": null}}}));
        assert!(collect_form_attributes("csr", Some(&descriptors), &values).is_empty());
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let descriptors = [
            descriptor("host", AttributeType::String),
            list_descriptor("ports", AttributeType::Integer),
        ];
        let values = form(
            "csr",
            json!({
                "host:STRING": "ca.example.com",
                "ports:INTEGER": [{"value": "1"}, {"value": "2"}],
            }),
        );
        let first = collect_form_attributes("csr", Some(&descriptors), &values);
        let second = collect_form_attributes("csr", Some(&descriptors), &values);
        assert_eq!(first, second);
    }
}
