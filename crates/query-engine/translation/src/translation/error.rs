//! Errors for query translation.

use thiserror::Error;

use query_engine_metadata::metadata::{mapper, AttributeType};
use query_engine_models::models::ConditionOperator;

/// A type for translation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Mapping(#[from] mapper::Error),
    #[error("Condition operator '{0}' is not supported by this data source.")]
    UnsupportedOperator(ConditionOperator),
    #[error("Condition operator '{0}' is not implemented.")]
    OperatorNotImplemented(ConditionOperator),
    #[error("Pattern value {0} must begin or end with a '%' wildcard.")]
    UnsupportedPatternValue(String),
    #[error("Filter operator '{0}' is not implemented.")]
    InvalidLogicalOperator(String),
    #[error("Condition operator '{operator}' expects {expected} value(s) but {found} were supplied.")]
    UnexpectedValueCount {
        operator: ConditionOperator,
        expected: String,
        found: usize,
    },
    #[error("A {value} value cannot be compared with attribute '{attribute}' of type {attribute_type:?}.")]
    TypeMismatch {
        attribute: String,
        attribute_type: AttributeType,
        value: &'static str,
    },
}
