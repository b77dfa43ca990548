//! Handle the translation of literal values to OData literals.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use query_engine_metadata::metadata::{AttributeMetadata, AttributeType, LiteralKind};
use query_engine_models::models::Value;
use query_engine_sql::odata::ast::Literal;

use crate::translation::error::Error;

/// Convert a value compared with an attribute into a literal, following the attribute's type.
pub fn translate_comparison_value(
    attribute: &AttributeMetadata,
    value: &Value,
) -> Result<Literal, Error> {
    let mismatch = || type_mismatch(attribute, value);

    match (attribute.r#type.literal_kind(), value) {
        (_, Value::Null) => Ok(Literal::Null),
        (LiteralKind::Text, Value::Uuid(_) | Value::DateTime(_))
            if !is_free_text(attribute.r#type) =>
        {
            translate_value(attribute, value)
        }
        (LiteralKind::Text, Value::String(text)) if !is_free_text(attribute.r#type) => {
            Ok(coerce_text(attribute.r#type, text)
                .unwrap_or_else(|| Literal::String(text.clone())))
        }
        (LiteralKind::Text, _) => value.as_text().map(Literal::String).ok_or_else(mismatch),
        (LiteralKind::Number, Value::String(text)) => {
            numeric_text(text).map(Literal::Raw).ok_or_else(mismatch)
        }
        (LiteralKind::Number, Value::Boolean(_) | Value::Uuid(_) | Value::DateTime(_)) => {
            Err(mismatch())
        }
        (LiteralKind::Boolean, Value::String(text)) => {
            match text.to_ascii_lowercase().as_str() {
                "true" => Ok(Literal::Boolean(true)),
                "false" => Ok(Literal::Boolean(false)),
                _ => Err(mismatch()),
            }
        }
        (LiteralKind::Boolean, value) if !matches!(value, Value::Boolean(_)) => Err(mismatch()),
        _ => translate_value(attribute, value),
    }
}

/// Convert a value into the literal its own kind calls for: strings quoted,
/// numbers, booleans, identifiers and timestamps bare.
pub fn translate_value(attribute: &AttributeMetadata, value: &Value) -> Result<Literal, Error> {
    match value {
        Value::Null => Ok(Literal::Null),
        Value::Boolean(b) => Ok(Literal::Boolean(*b)),
        Value::Double(d) if !d.is_finite() => Err(type_mismatch(attribute, value)),
        Value::Integer(_)
        | Value::Double(_)
        | Value::OptionSetValue(_)
        | Value::Money(_)
        | Value::Decimal(_)
        | Value::Uuid(_) => value
            .as_text()
            .map(Literal::Raw)
            .ok_or_else(|| type_mismatch(attribute, value)),
        Value::DateTime(timestamp) => Ok(Literal::Raw(format_timestamp(timestamp))),
        Value::String(s) => Ok(Literal::String(s.clone())),
        Value::Json(_) => Err(type_mismatch(attribute, value)),
    }
}

/// The quoted text of a value, as vendor function value lists carry it.
pub fn translate_list_value(attribute: &AttributeMetadata, value: &Value) -> Result<Literal, Error> {
    match value {
        Value::Null => Ok(Literal::Null),
        Value::DateTime(timestamp) => Ok(Literal::String(format_timestamp(timestamp))),
        _ => value
            .as_text()
            .map(Literal::String)
            .ok_or_else(|| type_mismatch(attribute, value)),
    }
}

/// The text a pattern or string function matches against.
pub fn pattern_text(attribute: &AttributeMetadata, value: &Value) -> Result<String, Error> {
    value
        .as_text()
        .ok_or_else(|| type_mismatch(attribute, value))
}

/// `yyyy-MM-ddTHH:mm:ssZ`, with fractional seconds only when present.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// The bare literal for text compared with an identifier or timestamp attribute.
/// Text that does not parse as the attribute's type stays a quoted string.
fn coerce_text(r#type: AttributeType, text: &str) -> Option<Literal> {
    match r#type {
        AttributeType::Uniqueidentifier
        | AttributeType::Lookup
        | AttributeType::Customer
        | AttributeType::Owner => Uuid::parse_str(text.trim())
            .ok()
            .map(|id| Literal::Raw(id.hyphenated().to_string())),
        AttributeType::DateTime => DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|timestamp| Literal::Raw(format_timestamp(&timestamp.with_timezone(&Utc)))),
        _ => None,
    }
}

/// Attribute types whose values are arbitrary text, never bare identifiers or timestamps.
fn is_free_text(r#type: AttributeType) -> bool {
    matches!(
        r#type,
        AttributeType::String | AttributeType::Memo | AttributeType::EntityName
    )
}

fn numeric_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .map(|_| trimmed.to_string())
}

fn type_mismatch(attribute: &AttributeMetadata, value: &Value) -> Error {
    Error::TypeMismatch {
        attribute: attribute.logical_name.clone(),
        attribute_type: attribute.r#type,
        value: value.kind(),
    }
}
