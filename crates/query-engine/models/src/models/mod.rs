//! Query and result models.

pub mod entity;
pub mod operators;
pub mod query;
pub mod value;

// re-export without modules
pub use entity::*;
pub use operators::*;
pub use query::*;
pub use value::*;
