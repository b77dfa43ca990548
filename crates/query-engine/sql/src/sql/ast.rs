//! Type definitions of a SQL AST representation for the document store.

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub top: Option<u32>,
    pub select_list: SelectList,
    pub from: From,
    pub where_: Where,
    pub order_by: OrderBy,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    SelectList(Vec<ColumnReference>),
    SelectStar,
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub struct From {
    pub collection: CollectionName,
    pub alias: TableAlias,
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: ColumnReference,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A conjunction of all the expressions, parenthesized.
    And(Vec<Expression>),
    /// A disjunction of all the expressions, parenthesized.
    Or(Vec<Expression>),
    BinaryOperator {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    ColumnReference(ColumnReference),
    Value(Value),
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
}

/// A literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int8(i64),
    Float8(f64),
    /// Decimal text that has already been checked to be a number.
    Number(String),
    String(String),
}

/// A reference to a property of the aliased document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReference {
    pub table: TableAlias,
    pub name: ColumnName,
}

/// The name of a document property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName(pub String);

/// The name of the queried collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionName(pub String);

/// The alias the collection is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlias {
    pub name: String,
}
