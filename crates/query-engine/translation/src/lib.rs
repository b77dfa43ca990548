//! Compile the generic query model into the dialects of the external stores.

pub mod translation;
