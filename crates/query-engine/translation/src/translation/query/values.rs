//! Handle the translation of literal values.

use std::str::FromStr;

use rust_decimal::Decimal;

use query_engine_metadata::metadata::{AttributeMetadata, LiteralKind};
use query_engine_models::models::Value;
use query_engine_sql::sql;

use crate::translation::error::Error;

/// Convert a condition value into a SQL literal, according to the type of the attribute
/// it is compared with.
pub fn translate_value(
    attribute: &AttributeMetadata,
    value: &Value,
) -> Result<sql::ast::Value, Error> {
    if value.is_null() {
        return Ok(sql::ast::Value::Null);
    }

    let mismatch = || Error::TypeMismatch {
        attribute: attribute.logical_name.clone(),
        attribute_type: attribute.r#type,
        value: value.kind(),
    };

    match attribute.r#type.literal_kind() {
        LiteralKind::Text => value
            .as_text()
            .map(sql::ast::Value::String)
            .ok_or_else(mismatch),
        LiteralKind::Number => match value {
            Value::Integer(i) => Ok(sql::ast::Value::Int8(*i)),
            Value::OptionSetValue(code) => Ok(sql::ast::Value::Int8((*code).into())),
            Value::Double(d) if d.is_finite() => Ok(sql::ast::Value::Float8(*d)),
            Value::Money(amount) | Value::Decimal(amount) => {
                Ok(sql::ast::Value::Number(amount.to_string()))
            }
            Value::String(text) => numeric_text(text).ok_or_else(mismatch),
            _ => Err(mismatch()),
        },
        LiteralKind::Boolean => match value {
            Value::Boolean(b) => Ok(sql::ast::Value::Bool(*b)),
            Value::String(text) => match text.to_ascii_lowercase().as_str() {
                "true" => Ok(sql::ast::Value::Bool(true)),
                "false" => Ok(sql::ast::Value::Bool(false)),
                _ => Err(mismatch()),
            },
            _ => Err(mismatch()),
        },
        LiteralKind::Untyped => match value {
            Value::Boolean(b) => Ok(sql::ast::Value::Bool(*b)),
            Value::Integer(i) => Ok(sql::ast::Value::Int8(*i)),
            Value::OptionSetValue(code) => Ok(sql::ast::Value::Int8((*code).into())),
            Value::Double(d) if d.is_finite() => Ok(sql::ast::Value::Float8(*d)),
            Value::Money(amount) | Value::Decimal(amount) => {
                Ok(sql::ast::Value::Number(amount.to_string()))
            }
            Value::Uuid(_) | Value::DateTime(_) | Value::String(_) => value
                .as_text()
                .map(sql::ast::Value::String)
                .ok_or_else(mismatch),
            _ => Err(mismatch()),
        },
    }
}

/// Accept a string only if it is a plain or scientific decimal number.
fn numeric_text(text: &str) -> Option<sql::ast::Value> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .map(|_| sql::ast::Value::Number(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_metadata::metadata::AttributeType;

    fn attribute(r#type: AttributeType) -> AttributeMetadata {
        AttributeMetadata::new("attr", "attr", r#type)
    }

    #[test]
    fn text_types_are_quoted() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            translate_value(&attribute(AttributeType::Uniqueidentifier), &Value::Uuid(id)),
            Ok(sql::ast::Value::String(
                "00000000-0000-0000-0000-000000000000".to_string()
            ))
        );
        assert_eq!(
            translate_value(&attribute(AttributeType::String), &Value::Integer(7)),
            Ok(sql::ast::Value::String("7".to_string()))
        );
    }

    #[test]
    fn sub_second_bounds_keep_their_precision() {
        let timestamp = "2017-11-03T08:30:15.500Z".parse().unwrap();
        assert_eq!(
            translate_value(&attribute(AttributeType::DateTime), &Value::DateTime(timestamp)),
            Ok(sql::ast::Value::String("2017-11-03T08:30:15.500Z".to_string()))
        );
    }

    #[test]
    fn numeric_strings_are_validated() {
        let money = attribute(AttributeType::Money);
        assert_eq!(
            translate_value(&money, &Value::from("12.50")),
            Ok(sql::ast::Value::Number("12.50".to_string()))
        );
        assert_eq!(
            translate_value(&money, &Value::from("1 OR 1=1")),
            Err(Error::TypeMismatch {
                attribute: "attr".to_string(),
                attribute_type: AttributeType::Money,
                value: "string",
            })
        );
    }

    #[test]
    fn nulls_are_always_accepted() {
        assert_eq!(
            translate_value(&attribute(AttributeType::Integer), &Value::Null),
            Ok(sql::ast::Value::Null)
        );
    }
}
