//! OData v4 query options: the AST and its rendering to a query string.

pub mod ast;
pub mod convert;
