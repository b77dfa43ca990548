pub mod connector;
pub mod document_store;
pub mod error;
pub mod remote_service;
pub mod state;

pub use connector::{DataService, VirtualEntity, VirtualEntitySetup};
