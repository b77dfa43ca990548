//! Type definitions of an OData v4 query option representation.

/// Namespace of the vendor query functions exposed by the remote service.
pub const VENDOR_NAMESPACE: &str = "Microsoft.Dynamics.CRM";

/// The full set of query options for a collection request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOptions {
    pub select: Vec<String>,
    pub top: Option<u32>,
    pub skip_token: Option<SkipToken>,
    pub order_by: Vec<OrderByElement>,
    pub filter: Option<Expression>,
}

/// Continuation of a previous page, in the element form the remote service expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipToken {
    pub page_number: u32,
    pub paging_cookie: String,
}

/// A single element in an `$orderby` option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByElement {
    pub property: String,
    pub direction: OrderByDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// A boolean `$filter` expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    And(Vec<Expression>),
    Or(Vec<Expression>),
    Not(Box<Expression>),
    /// `<property> <operator> <value>`
    Comparison {
        property: String,
        operator: ComparisonOperator,
        value: Literal,
    },
    /// `<function>(<property>, <value>)`
    StringFunction {
        function: StringFunction,
        property: String,
        value: Literal,
    },
    /// `<namespace>.<name>(PropertyName='<property>'[, arguments])`
    VendorFunction {
        name: String,
        property: String,
        arguments: VendorArguments,
    },
    Literal(Literal),
}

/// Native infix comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

/// Native string functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFunction {
    Contains,
    StartsWith,
    EndsWith,
}

/// Arguments passed to a vendor function after the property name.
#[derive(Debug, Clone, PartialEq)]
pub enum VendorArguments {
    None,
    Single(Literal),
    Pair(Literal, Literal),
    List(Vec<Literal>),
}

/// A literal value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    /// Numeric, guid and date-time literals, written bare.
    Raw(String),
    /// A single-quoted string.
    String(String),
}
