//! Translate the incoming QueryModel to a query the external store understands.
//!
//! `query` compiles to the document store's SQL-like text,
//! `odata` compiles to OData v4 query options for the remote service.

pub mod error;
pub mod odata;
pub mod query;
