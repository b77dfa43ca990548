//! The condition operator table of the remote service dialect.

use query_engine_models::models::ConditionOperator;
use query_engine_sql::odata::ast::{ComparisonOperator, StringFunction};

/// How a condition with a given operator is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSyntax {
    /// `<property> <op> <value>`
    Comparison(ComparisonOperator),
    /// A string function chosen by the position of the `%` marker in the value.
    Pattern { negated: bool },
    /// `[not ]<function>(<property>, <value>)`
    StringFunction {
        function: StringFunction,
        negated: bool,
    },
    /// `<property> eq null` or `<property> ne null`
    NullCheck { negated: bool },
    /// Vendor function carrying the property and the whole value list.
    VendorList,
    /// Vendor function carrying the property and one value.
    VendorSingle,
    /// Vendor function carrying only the property.
    VendorNone,
    /// Vendor function carrying the property and two values.
    VendorPair,
}

/// How many values a condition must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Values are not read.
    Ignored,
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Ignored => true,
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }

    pub fn describe(self) -> String {
        match self {
            Arity::Ignored => "any number of".to_string(),
            Arity::Exactly(n) => format!("exactly {n}"),
            Arity::AtLeast(n) => format!("at least {n}"),
        }
    }
}

/// The syntax of an operator and the number of values it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorMapping {
    pub syntax: OperatorSyntax,
    pub arity: Arity,
}

/// Operators with no mapping in this dialect. Conditions using them are rejected.
pub const NOT_IMPLEMENTED: [ConditionOperator; 6] = [
    ConditionOperator::ChildOf,
    ConditionOperator::Mask,
    ConditionOperator::NotMask,
    ConditionOperator::MasksSelect,
    ConditionOperator::ContainValues,
    ConditionOperator::DoesNotContainValues,
];

/// Look up the mapping of an operator. Returns `None` for the operators listed in
/// [`NOT_IMPLEMENTED`].
pub fn operator_mapping(operator: ConditionOperator) -> Option<OperatorMapping> {
    use ConditionOperator as Op;

    let mapping = |syntax, arity| Some(OperatorMapping { syntax, arity });
    let comparison = |operator| mapping(OperatorSyntax::Comparison(operator), Arity::Exactly(1));
    let string_function = |function, negated| {
        mapping(
            OperatorSyntax::StringFunction { function, negated },
            Arity::Exactly(1),
        )
    };

    match operator {
        Op::Equal => comparison(ComparisonOperator::Eq),
        Op::NotEqual => comparison(ComparisonOperator::Ne),
        Op::GreaterThan => comparison(ComparisonOperator::Gt),
        Op::LessThan => comparison(ComparisonOperator::Lt),
        Op::GreaterEqual => comparison(ComparisonOperator::Ge),
        Op::LessEqual => comparison(ComparisonOperator::Le),

        Op::Like => mapping(OperatorSyntax::Pattern { negated: false }, Arity::Exactly(1)),
        Op::NotLike => mapping(OperatorSyntax::Pattern { negated: true }, Arity::Exactly(1)),
        Op::Contains => string_function(StringFunction::Contains, false),
        Op::DoesNotContain => string_function(StringFunction::Contains, true),
        Op::BeginsWith => string_function(StringFunction::StartsWith, false),
        Op::DoesNotBeginWith => string_function(StringFunction::StartsWith, true),
        Op::EndsWith => string_function(StringFunction::EndsWith, false),
        Op::DoesNotEndWith => string_function(StringFunction::EndsWith, true),

        Op::Null => mapping(OperatorSyntax::NullCheck { negated: false }, Arity::Ignored),
        Op::NotNull => mapping(OperatorSyntax::NullCheck { negated: true }, Arity::Ignored),

        Op::In | Op::NotIn => mapping(OperatorSyntax::VendorList, Arity::AtLeast(1)),
        Op::Between | Op::NotBetween => mapping(OperatorSyntax::VendorList, Arity::Exactly(2)),

        Op::Above
        | Op::AboveOrEqual
        | Op::Under
        | Op::UnderOrEqual
        | Op::NotUnder
        | Op::LastXHours
        | Op::NextXHours
        | Op::LastXDays
        | Op::NextXDays
        | Op::LastXWeeks
        | Op::NextXWeeks
        | Op::LastXMonths
        | Op::NextXMonths
        | Op::LastXYears
        | Op::NextXYears
        | Op::LastXFiscalYears
        | Op::LastXFiscalPeriods
        | Op::NextXFiscalYears
        | Op::NextXFiscalPeriods
        | Op::OlderThanXYears
        | Op::OlderThanXMonths
        | Op::OlderThanXWeeks
        | Op::OlderThanXDays
        | Op::OlderThanXHours
        | Op::OlderThanXMinutes
        | Op::On
        | Op::OnOrBefore
        | Op::OnOrAfter
        | Op::NotOn
        | Op::InFiscalYear
        | Op::InFiscalPeriod => mapping(OperatorSyntax::VendorSingle, Arity::Exactly(1)),

        Op::Yesterday
        | Op::Today
        | Op::Tomorrow
        | Op::Last7Days
        | Op::Next7Days
        | Op::LastWeek
        | Op::ThisWeek
        | Op::NextWeek
        | Op::LastMonth
        | Op::ThisMonth
        | Op::NextMonth
        | Op::LastYear
        | Op::ThisYear
        | Op::NextYear
        | Op::ThisFiscalYear
        | Op::ThisFiscalPeriod
        | Op::NextFiscalYear
        | Op::NextFiscalPeriod
        | Op::LastFiscalYear
        | Op::LastFiscalPeriod
        | Op::EqualUserId
        | Op::NotEqualUserId
        | Op::EqualUserLanguage
        | Op::EqualUserTeams
        | Op::EqualUserOrUserTeams
        | Op::EqualUserOrUserHierarchy
        | Op::EqualUserOrUserHierarchyAndTeams
        | Op::EqualBusinessId
        | Op::NotEqualBusinessId => mapping(OperatorSyntax::VendorNone, Arity::Ignored),

        Op::InFiscalPeriodAndYear
        | Op::InOrBeforeFiscalPeriodAndYear
        | Op::InOrAfterFiscalPeriodAndYear => {
            mapping(OperatorSyntax::VendorPair, Arity::Exactly(2))
        }

        Op::ChildOf
        | Op::Mask
        | Op::NotMask
        | Op::MasksSelect
        | Op::ContainValues
        | Op::DoesNotContainValues => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_listed_operators_are_unmapped() {
        for operator in enum_iterator::all::<ConditionOperator>() {
            assert_eq!(
                operator_mapping(operator).is_none(),
                NOT_IMPLEMENTED.contains(&operator),
                "{operator}"
            );
        }
    }

    #[test]
    fn range_operators_take_two_values() {
        let between = operator_mapping(ConditionOperator::Between).unwrap();
        assert!(between.arity.accepts(2));
        assert!(!between.arity.accepts(3));

        let in_list = operator_mapping(ConditionOperator::In).unwrap();
        assert!(in_list.arity.accepts(5));
        assert!(!in_list.arity.accepts(0));
    }
}
