//! Abstract syntax and rendering for the query dialects we compile to.
//!
//! `sql` is the SQL-like text accepted by the document store.
//! `odata` is the OData v4 query option set accepted by the remote service.

pub mod odata;
pub mod sql;
