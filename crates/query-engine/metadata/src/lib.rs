//! Metadata of virtual entities and the mapping onto their external names and types.

pub mod metadata;
