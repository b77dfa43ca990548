//! Handle filtering/where clauses translation.

use query_engine_metadata::metadata::mapper::AttributeMapper;
use query_engine_models::models;
use query_engine_sql::sql;

use super::values;
use crate::translation::error::Error;

/// Translate the root filter group into a WHERE expression.
/// An empty root group, or one that collapses to an empty `And`, yields the empty
/// WHERE clause.
pub fn translate_criteria(
    mapper: &AttributeMapper,
    criteria: &models::FilterGroup,
) -> Result<sql::ast::Expression, Error> {
    if criteria.is_empty() {
        return Ok(sql::helpers::empty_where());
    }

    match translate_group(mapper, criteria)? {
        sql::ast::Expression::And(expressions) if expressions.is_empty() => {
            Ok(sql::helpers::empty_where())
        }
        expression => Ok(expression),
    }
}

/// Translate a filter group.
///
/// A group without direct conditions and a single nested group is translated as that
/// nested group. Otherwise every child is translated, in order, and joined by the
/// group's operator.
pub fn translate_group(
    mapper: &AttributeMapper,
    group: &models::FilterGroup,
) -> Result<sql::ast::Expression, Error> {
    if let Some(nested) = group.single_nested_group() {
        return translate_group(mapper, nested);
    }

    let connective: fn(Vec<sql::ast::Expression>) -> sql::ast::Expression =
        match &group.filter_operator {
            models::LogicalOperator::And => sql::ast::Expression::And,
            models::LogicalOperator::Or => sql::ast::Expression::Or,
            models::LogicalOperator::Unrecognized(name) => {
                return Err(Error::InvalidLogicalOperator(name.clone()))
            }
        };

    let expressions = group
        .children
        .iter()
        .map(|child| match child {
            models::FilterNode::Group(nested) => translate_group(mapper, nested),
            models::FilterNode::Condition(condition) => translate_condition(mapper, condition),
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(connective(expressions))
}

/// Translate a single condition. Only the six comparison operators have a
/// counterpart in the document store's dialect.
fn translate_condition(
    mapper: &AttributeMapper,
    condition: &models::Condition,
) -> Result<sql::ast::Expression, Error> {
    let operator = match condition.operator {
        models::ConditionOperator::Equal => sql::ast::BinaryOperator::Equals,
        models::ConditionOperator::NotEqual => sql::ast::BinaryOperator::NotEquals,
        models::ConditionOperator::GreaterThan => sql::ast::BinaryOperator::GreaterThan,
        models::ConditionOperator::LessThan => sql::ast::BinaryOperator::LessThan,
        models::ConditionOperator::GreaterEqual => sql::ast::BinaryOperator::GreaterThanOrEqualTo,
        models::ConditionOperator::LessEqual => sql::ast::BinaryOperator::LessThanOrEqualTo,
        other => return Err(Error::UnsupportedOperator(other)),
    };

    let attribute = mapper.attribute(&condition.attribute_name)?;

    let value = match condition.values.as_slice() {
        [value] => values::translate_value(attribute, value)?,
        _ => {
            return Err(Error::UnexpectedValueCount {
                operator: condition.operator,
                expected: "exactly 1".to_string(),
                found: condition.values.len(),
            })
        }
    };

    let column = sql::helpers::make_column(
        &sql::helpers::make_table_alias(),
        &attribute.external_name,
    );

    Ok(sql::ast::Expression::BinaryOperator {
        left: Box::new(sql::ast::Expression::ColumnReference(column)),
        operator,
        right: Box::new(sql::ast::Expression::Value(value)),
    })
}
