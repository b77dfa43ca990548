//! Query execution against the external stores over HTTP.
//!
//! `document` talks to the document store, `odata` to the remote service.
//! Both turn the raw records they receive into generic entities via `materialize`.

pub mod document;
pub mod error;
pub mod materialize;
pub mod metrics;
pub mod odata;
pub mod records;
