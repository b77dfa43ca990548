//! The backend-agnostic request and response types exchanged with the caller.

pub mod models;
