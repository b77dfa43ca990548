//! Translate attribute names between the platform and the external store,
//! and coerce raw external values into typed values.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use query_engine_models::models::Value;

use super::database::{AttributeMetadata, AttributeType, EntityMetadata};

/// Timestamp layouts accepted when the external store omits an offset.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Errors raised while mapping attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("attribute '{attribute}' not found on entity '{entity}'")]
    AttributeNotFound { entity: String, attribute: String },
    #[error("value {value} of attribute '{attribute}' cannot be read as {expected:?}")]
    InvalidAttributeValue {
        attribute: String,
        expected: AttributeType,
        value: String,
    },
}

/// Attribute name mapping for one entity.
#[derive(Debug, Clone, Copy)]
pub struct AttributeMapper<'a> {
    metadata: &'a EntityMetadata,
}

impl<'a> AttributeMapper<'a> {
    pub fn new(metadata: &'a EntityMetadata) -> Self {
        AttributeMapper { metadata }
    }

    pub fn metadata(&self) -> &'a EntityMetadata {
        self.metadata
    }

    /// Look up an attribute by its logical name.
    pub fn attribute(&self, logical_name: &str) -> Result<&'a AttributeMetadata, Error> {
        self.metadata
            .attribute(logical_name)
            .ok_or_else(|| Error::AttributeNotFound {
                entity: self.metadata.logical_name.clone(),
                attribute: logical_name.to_string(),
            })
    }

    /// The external name of a logical attribute.
    pub fn to_external(&self, logical_name: &str) -> Result<&'a str, Error> {
        self.attribute(logical_name)
            .map(|attribute| attribute.external_name.as_str())
    }

    /// The logical name of an external attribute.
    pub fn to_logical(&self, external_name: &str) -> Result<&'a str, Error> {
        self.metadata
            .attribute_by_external_name(external_name)
            .map(|attribute| attribute.logical_name.as_str())
            .ok_or_else(|| Error::AttributeNotFound {
                entity: self.metadata.logical_name.clone(),
                attribute: external_name.to_string(),
            })
    }

    /// The primary id attribute. Its absence from the attribute list is a metadata error.
    pub fn primary_id(&self) -> Result<&'a AttributeMetadata, Error> {
        self.attribute(&self.metadata.primary_id_attribute)
    }
}

/// Coerce a raw external value into a typed value according to the attribute type.
///
/// A null raw value always yields `Value::Null`.
pub fn coerce(attribute: &AttributeMetadata, raw: &serde_json::Value) -> Result<Value, Error> {
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let invalid = || Error::InvalidAttributeValue {
        attribute: attribute.logical_name.clone(),
        expected: attribute.r#type,
        value: raw.to_string(),
    };

    match attribute.r#type {
        AttributeType::Picklist => raw
            .as_i64()
            .and_then(|code| i32::try_from(code).ok())
            .map(Value::OptionSetValue)
            .ok_or_else(invalid),
        AttributeType::Uniqueidentifier => raw
            .as_str()
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(Value::Uuid)
            .ok_or_else(invalid),
        AttributeType::DateTime => raw
            .as_str()
            .and_then(parse_timestamp)
            .map(Value::DateTime)
            .ok_or_else(invalid),
        AttributeType::Money => parse_decimal(raw).map(Value::Money).ok_or_else(invalid),
        _ => Ok(from_json(raw)),
    }
}

/// Coerce a raw value into a record identifier.
/// A null raw value yields `None`.
pub fn coerce_identifier(
    attribute: &AttributeMetadata,
    raw: &serde_json::Value,
) -> Result<Option<Uuid>, Error> {
    match raw {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Uuid::parse_str(s).map(Some).map_err(|_| {
            Error::InvalidAttributeValue {
                attribute: attribute.logical_name.clone(),
                expected: AttributeType::Uniqueidentifier,
                value: raw.to_string(),
            }
        }),
        _ => Err(Error::InvalidAttributeValue {
            attribute: attribute.logical_name.clone(),
            expected: AttributeType::Uniqueidentifier,
            value: raw.to_string(),
        }),
    }
}

/// Copy a raw value without reference to any attribute type.
pub fn from_json(raw: &serde_json::Value) -> Value {
    match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(num) => match (num.as_i64(), num.as_u64()) {
            (Some(i), _) => Value::Integer(i),
            (None, Some(u)) => Value::Decimal(Decimal::from(u)),
            (None, None) => num.as_f64().map_or(Value::Json(raw.clone()), Value::Double),
        },
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Json(raw.clone()),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
        return Some(timestamp.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_decimal(raw: &serde_json::Value) -> Option<Decimal> {
    let text = match raw {
        serde_json::Value::Number(num) => num.to_string(),
        serde_json::Value::String(s) => s.clone(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
