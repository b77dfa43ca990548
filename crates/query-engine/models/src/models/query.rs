//! The generic query model handed to us by the caller.

use serde::{Deserialize, Serialize};

use super::operators::ConditionOperator;
use super::value::Value;

/// A backend-agnostic request for records of a single entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryModel {
    pub entity_name: String,
    #[serde(default)]
    pub column_set: ColumnSet,
    /// The root of the filter tree. It is always a group, possibly an empty one.
    #[serde(default)]
    pub criteria: FilterGroup,
    #[serde(default)]
    pub orders: Vec<OrderSpec>,
    #[serde(default)]
    pub paging: Option<PagingInfo>,
    /// Maximum number of rows to return.
    #[serde(default)]
    pub top_count: Option<u32>,
}

impl QueryModel {
    /// A query for every column of every record of the entity.
    pub fn new(entity_name: impl Into<String>) -> Self {
        QueryModel {
            entity_name: entity_name.into(),
            column_set: ColumnSet::all(),
            criteria: FilterGroup::default(),
            orders: vec![],
            paging: None,
            top_count: None,
        }
    }
}

/// The projection of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSet {
    pub all_columns: bool,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl ColumnSet {
    pub fn all() -> Self {
        ColumnSet {
            all_columns: true,
            columns: vec![],
        }
    }

    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSet {
            all_columns: false,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Does this column set narrow the projection?
    /// An explicit column set with no columns is treated as unrestricted.
    pub fn is_restricted(&self) -> bool {
        !self.all_columns && !self.columns.is_empty()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        ColumnSet::all()
    }
}

/// A node in the boolean filter tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterNode {
    Group(FilterGroup),
    Condition(Condition),
}

impl FilterNode {
    pub fn condition(
        attribute_name: impl Into<String>,
        operator: ConditionOperator,
        values: Vec<Value>,
    ) -> Self {
        FilterNode::Condition(Condition::new(attribute_name, operator, values))
    }
}

/// A boolean group of filter nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    pub filter_operator: LogicalOperator,
    #[serde(default)]
    pub children: Vec<FilterNode>,
}

impl FilterGroup {
    pub fn and(children: Vec<FilterNode>) -> Self {
        FilterGroup {
            filter_operator: LogicalOperator::And,
            children,
        }
    }

    pub fn or(children: Vec<FilterNode>) -> Self {
        FilterGroup {
            filter_operator: LogicalOperator::Or,
            children,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The direct conditions of this group, skipping nested groups.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.children.iter().filter_map(|child| match child {
            FilterNode::Condition(condition) => Some(condition),
            FilterNode::Group(_) => None,
        })
    }

    /// The direct nested groups of this group, skipping conditions.
    pub fn groups(&self) -> impl Iterator<Item = &FilterGroup> {
        self.children.iter().filter_map(|child| match child {
            FilterNode::Group(group) => Some(group),
            FilterNode::Condition(_) => None,
        })
    }

    /// If this group has no direct conditions and exactly one nested group, return it.
    /// Such a group contributes nothing of its own and compiles to its child.
    pub fn single_nested_group(&self) -> Option<&FilterGroup> {
        match self.children.as_slice() {
            [FilterNode::Group(group)] => Some(group),
            _ => None,
        }
    }
}

impl Default for FilterGroup {
    fn default() -> Self {
        FilterGroup::and(vec![])
    }
}

/// The operator joining the children of a group.
///
/// Any name is accepted when deserializing. Names other than `And` and `Or`
/// are kept so that the compilers can reject them with a precise error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogicalOperator {
    And,
    Or,
    Unrecognized(String),
}

impl From<String> for LogicalOperator {
    fn from(value: String) -> Self {
        match value.as_str() {
            "And" | "and" => LogicalOperator::And,
            "Or" | "or" => LogicalOperator::Or,
            _ => LogicalOperator::Unrecognized(value),
        }
    }
}

impl From<LogicalOperator> for String {
    fn from(value: LogicalOperator) -> Self {
        match value {
            LogicalOperator::And => "And".to_string(),
            LogicalOperator::Or => "Or".to_string(),
            LogicalOperator::Unrecognized(name) => name,
        }
    }
}

/// A leaf comparison in the filter tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub attribute_name: String,
    pub operator: ConditionOperator,
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Condition {
    pub fn new(
        attribute_name: impl Into<String>,
        operator: ConditionOperator,
        values: Vec<Value>,
    ) -> Self {
        Condition {
            attribute_name: attribute_name.into(),
            operator,
            values,
        }
    }
}

/// One element of the sort order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSpec {
    pub attribute_name: String,
    #[serde(default)]
    pub descending: bool,
}

impl OrderSpec {
    pub fn ascending(attribute_name: impl Into<String>) -> Self {
        OrderSpec {
            attribute_name: attribute_name.into(),
            descending: false,
        }
    }

    pub fn descending(attribute_name: impl Into<String>) -> Self {
        OrderSpec {
            attribute_name: attribute_name.into(),
            descending: true,
        }
    }
}

/// Paging request. The cookie is an opaque token previously produced by a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingInfo {
    #[serde(default = "first_page")]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub cookie: Option<String>,
}

fn first_page() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_logical_operators_are_kept() {
        let group: FilterGroup =
            serde_json::from_str(r#"{"filterOperator": "Xor", "children": []}"#).unwrap();
        assert_eq!(
            group.filter_operator,
            LogicalOperator::Unrecognized("Xor".to_string())
        );
    }

    #[test]
    fn deserializes_a_query_with_defaults() {
        let query: QueryModel = serde_json::from_str(
            r#"{
                "entityName": "new_account",
                "criteria": {
                    "filterOperator": "Or",
                    "children": [
                        {"condition": {"attributeName": "new_name", "operator": "Equal", "values": ["Contoso"]}},
                        {"group": {"filterOperator": "And", "children": []}}
                    ]
                },
                "orders": [{"attributeName": "new_name", "descending": true}]
            }"#,
        )
        .unwrap();

        assert!(!query.column_set.is_restricted());
        assert_eq!(query.criteria.filter_operator, LogicalOperator::Or);
        assert_eq!(query.criteria.conditions().count(), 1);
        assert_eq!(query.criteria.groups().count(), 1);
        assert_eq!(query.orders, vec![OrderSpec::descending("new_name")]);
        assert_eq!(query.paging, None);
    }

    #[test]
    fn single_nested_group_requires_no_direct_conditions() {
        let inner = FilterGroup::or(vec![]);
        let wrapped = FilterGroup::and(vec![FilterNode::Group(inner.clone())]);
        assert_eq!(wrapped.single_nested_group(), Some(&inner));

        let mixed = FilterGroup::and(vec![
            FilterNode::Group(inner),
            FilterNode::condition("a", ConditionOperator::Null, vec![]),
        ]);
        assert_eq!(mixed.single_nested_group(), None);
    }
}
