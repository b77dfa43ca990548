//! Handle `$filter` translation.

use query_engine_metadata::metadata::mapper::AttributeMapper;
use query_engine_models::models;
use query_engine_sql::odata::ast::{
    ComparisonOperator, Expression, Literal, StringFunction, VendorArguments,
};

use super::operators::{operator_mapping, OperatorSyntax};
use super::values;
use crate::translation::error::Error;

/// Translate the root filter group. An empty root group, or one that collapses to an
/// empty `and`, means no `$filter` at all.
pub fn translate_criteria(
    mapper: &AttributeMapper,
    criteria: &models::FilterGroup,
) -> Result<Option<Expression>, Error> {
    if criteria.is_empty() {
        return Ok(None);
    }

    match translate_group(mapper, criteria)? {
        Expression::And(expressions) if expressions.is_empty() => Ok(None),
        expression => Ok(Some(expression)),
    }
}

/// Translate a filter group, collapsing a group whose only child is another group.
pub fn translate_group(
    mapper: &AttributeMapper,
    group: &models::FilterGroup,
) -> Result<Expression, Error> {
    if let Some(nested) = group.single_nested_group() {
        return translate_group(mapper, nested);
    }

    let connective: fn(Vec<Expression>) -> Expression = match &group.filter_operator {
        models::LogicalOperator::And => Expression::And,
        models::LogicalOperator::Or => Expression::Or,
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

fn translate_condition(
    mapper: &AttributeMapper,
    condition: &models::Condition,
) -> Result<Expression, Error> {
    let mapping = operator_mapping(condition.operator)
        .ok_or(Error::OperatorNotImplemented(condition.operator))?;

    let attribute = mapper.attribute(&condition.attribute_name)?;
    let property = attribute.external_name.clone();

    if !mapping.arity.accepts(condition.values.len()) {
        return Err(Error::UnexpectedValueCount {
            operator: condition.operator,
            expected: mapping.arity.describe(),
            found: condition.values.len(),
        });
    }

    let expression = match mapping.syntax {
        OperatorSyntax::Comparison(operator) => Expression::Comparison {
            property,
            operator,
            value: values::translate_comparison_value(attribute, &condition.values[0])?,
        },
        OperatorSyntax::Pattern { negated } => {
            let text = values::pattern_text(attribute, &condition.values[0])?;
            let function = pattern_function(&text)?;
            negate(
                negated,
                Expression::StringFunction {
                    function,
                    property,
                    value: Literal::String(text),
                },
            )
        }
        OperatorSyntax::StringFunction { function, negated } => negate(
            negated,
            Expression::StringFunction {
                function,
                property,
                value: Literal::String(values::pattern_text(attribute, &condition.values[0])?),
            },
        ),
        OperatorSyntax::NullCheck { negated } => Expression::Comparison {
            property,
            operator: if negated {
                ComparisonOperator::Ne
            } else {
                ComparisonOperator::Eq
            },
            value: Literal::Null,
        },
        OperatorSyntax::VendorList => vendor_function(
            condition.operator,
            property,
            VendorArguments::List(
                condition
                    .values
                    .iter()
                    .map(|value| values::translate_list_value(attribute, value))
                    .collect::<Result<Vec<_>, Error>>()?,
            ),
        ),
        OperatorSyntax::VendorSingle => vendor_function(
            condition.operator,
            property,
            VendorArguments::Single(values::translate_value(attribute, &condition.values[0])?),
        ),
        OperatorSyntax::VendorNone => {
            vendor_function(condition.operator, property, VendorArguments::None)
        }
        OperatorSyntax::VendorPair => vendor_function(
            condition.operator,
            property,
            VendorArguments::Pair(
                values::translate_value(attribute, &condition.values[0])?,
                values::translate_value(attribute, &condition.values[1])?,
            ),
        ),
    };

    Ok(expression)
}

/// Pick the string function from the position of the `%` markers.
fn pattern_function(text: &str) -> Result<StringFunction, Error> {
    match (text.starts_with('%'), text.ends_with('%')) {
        (true, true) => Ok(StringFunction::Contains),
        (true, false) => Ok(StringFunction::EndsWith),
        (false, true) => Ok(StringFunction::StartsWith),
        (false, false) => Err(Error::UnsupportedPatternValue(text.to_string())),
    }
}

fn negate(negated: bool, expression: Expression) -> Expression {
    if negated {
        Expression::Not(Box::new(expression))
    } else {
        expression
    }
}

fn vendor_function(
    operator: models::ConditionOperator,
    property: String,
    arguments: VendorArguments,
) -> Expression {
    Expression::VendorFunction {
        name: operator.name().to_string(),
        property,
        arguments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_position_selects_the_function() {
        assert_eq!(pattern_function("%foo%"), Ok(StringFunction::Contains));
        assert_eq!(pattern_function("%foo"), Ok(StringFunction::EndsWith));
        assert_eq!(pattern_function("foo%"), Ok(StringFunction::StartsWith));
        assert_eq!(
            pattern_function("foo"),
            Err(Error::UnsupportedPatternValue("foo".to_string()))
        );
    }
}
