//! Condition operators of the platform query model.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Every comparison operator a condition may carry.
///
/// The set mirrors the host platform. Backends support different subsets; the
/// compilers decide which ones they can express and reject the rest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sequence,
    Serialize,
    Deserialize,
)]
pub enum ConditionOperator {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
    Like,
    NotLike,
    In,
    NotIn,
    Between,
    NotBetween,
    Null,
    NotNull,
    Yesterday,
    Today,
    Tomorrow,
    Last7Days,
    Next7Days,
    LastWeek,
    ThisWeek,
    NextWeek,
    LastMonth,
    ThisMonth,
    NextMonth,
    On,
    OnOrBefore,
    OnOrAfter,
    LastYear,
    ThisYear,
    NextYear,
    LastXHours,
    NextXHours,
    LastXDays,
    NextXDays,
    LastXWeeks,
    NextXWeeks,
    LastXMonths,
    NextXMonths,
    LastXYears,
    NextXYears,
    EqualUserId,
    NotEqualUserId,
    EqualBusinessId,
    NotEqualBusinessId,
    ChildOf,
    Mask,
    NotMask,
    MasksSelect,
    Contains,
    DoesNotContain,
    EqualUserLanguage,
    NotOn,
    OlderThanXMonths,
    BeginsWith,
    DoesNotBeginWith,
    EndsWith,
    DoesNotEndWith,
    ThisFiscalYear,
    ThisFiscalPeriod,
    NextFiscalYear,
    NextFiscalPeriod,
    LastFiscalYear,
    LastFiscalPeriod,
    LastXFiscalYears,
    LastXFiscalPeriods,
    NextXFiscalYears,
    NextXFiscalPeriods,
    InFiscalYear,
    InFiscalPeriod,
    InFiscalPeriodAndYear,
    InOrBeforeFiscalPeriodAndYear,
    InOrAfterFiscalPeriodAndYear,
    EqualUserTeams,
    EqualUserOrUserTeams,
    Under,
    NotUnder,
    UnderOrEqual,
    Above,
    AboveOrEqual,
    EqualUserOrUserHierarchy,
    EqualUserOrUserHierarchyAndTeams,
    OlderThanXYears,
    OlderThanXWeeks,
    OlderThanXDays,
    OlderThanXHours,
    OlderThanXMinutes,
    ContainValues,
    DoesNotContainValues,
}

impl ConditionOperator {
    /// The platform name of the operator. Remote functions are named after it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::NotEqual => "NotEqual",
            Self::GreaterThan => "GreaterThan",
            Self::LessThan => "LessThan",
            Self::GreaterEqual => "GreaterEqual",
            Self::LessEqual => "LessEqual",
            Self::Like => "Like",
            Self::NotLike => "NotLike",
            Self::In => "In",
            Self::NotIn => "NotIn",
            Self::Between => "Between",
            Self::NotBetween => "NotBetween",
            Self::Null => "Null",
            Self::NotNull => "NotNull",
            Self::Yesterday => "Yesterday",
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::Last7Days => "Last7Days",
            Self::Next7Days => "Next7Days",
            Self::LastWeek => "LastWeek",
            Self::ThisWeek => "ThisWeek",
            Self::NextWeek => "NextWeek",
            Self::LastMonth => "LastMonth",
            Self::ThisMonth => "ThisMonth",
            Self::NextMonth => "NextMonth",
            Self::On => "On",
            Self::OnOrBefore => "OnOrBefore",
            Self::OnOrAfter => "OnOrAfter",
            Self::LastYear => "LastYear",
            Self::ThisYear => "ThisYear",
            Self::NextYear => "NextYear",
            Self::LastXHours => "LastXHours",
            Self::NextXHours => "NextXHours",
            Self::LastXDays => "LastXDays",
            Self::NextXDays => "NextXDays",
            Self::LastXWeeks => "LastXWeeks",
            Self::NextXWeeks => "NextXWeeks",
            Self::LastXMonths => "LastXMonths",
            Self::NextXMonths => "NextXMonths",
            Self::LastXYears => "LastXYears",
            Self::NextXYears => "NextXYears",
            Self::EqualUserId => "EqualUserId",
            Self::NotEqualUserId => "NotEqualUserId",
            Self::EqualBusinessId => "EqualBusinessId",
            Self::NotEqualBusinessId => "NotEqualBusinessId",
            Self::ChildOf => "ChildOf",
            Self::Mask => "Mask",
            Self::NotMask => "NotMask",
            Self::MasksSelect => "MasksSelect",
            Self::Contains => "Contains",
            Self::DoesNotContain => "DoesNotContain",
            Self::EqualUserLanguage => "EqualUserLanguage",
            Self::NotOn => "NotOn",
            Self::OlderThanXMonths => "OlderThanXMonths",
            Self::BeginsWith => "BeginsWith",
            Self::DoesNotBeginWith => "DoesNotBeginWith",
            Self::EndsWith => "EndsWith",
            Self::DoesNotEndWith => "DoesNotEndWith",
            Self::ThisFiscalYear => "ThisFiscalYear",
            Self::ThisFiscalPeriod => "ThisFiscalPeriod",
            Self::NextFiscalYear => "NextFiscalYear",
            Self::NextFiscalPeriod => "NextFiscalPeriod",
            Self::LastFiscalYear => "LastFiscalYear",
            Self::LastFiscalPeriod => "LastFiscalPeriod",
            Self::LastXFiscalYears => "LastXFiscalYears",
            Self::LastXFiscalPeriods => "LastXFiscalPeriods",
            Self::NextXFiscalYears => "NextXFiscalYears",
            Self::NextXFiscalPeriods => "NextXFiscalPeriods",
            Self::InFiscalYear => "InFiscalYear",
            Self::InFiscalPeriod => "InFiscalPeriod",
            Self::InFiscalPeriodAndYear => "InFiscalPeriodAndYear",
            Self::InOrBeforeFiscalPeriodAndYear => "InOrBeforeFiscalPeriodAndYear",
            Self::InOrAfterFiscalPeriodAndYear => "InOrAfterFiscalPeriodAndYear",
            Self::EqualUserTeams => "EqualUserTeams",
            Self::EqualUserOrUserTeams => "EqualUserOrUserTeams",
            Self::Under => "Under",
            Self::NotUnder => "NotUnder",
            Self::UnderOrEqual => "UnderOrEqual",
            Self::Above => "Above",
            Self::AboveOrEqual => "AboveOrEqual",
            Self::EqualUserOrUserHierarchy => "EqualUserOrUserHierarchy",
            Self::EqualUserOrUserHierarchyAndTeams => "EqualUserOrUserHierarchyAndTeams",
            Self::OlderThanXYears => "OlderThanXYears",
            Self::OlderThanXWeeks => "OlderThanXWeeks",
            Self::OlderThanXDays => "OlderThanXDays",
            Self::OlderThanXHours => "OlderThanXHours",
            Self::OlderThanXMinutes => "OlderThanXMinutes",
            Self::ContainValues => "ContainValues",
            Self::DoesNotContainValues => "DoesNotContainValues",
        }
    }
}

impl std::fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
